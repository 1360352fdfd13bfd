//! Document adapters - care-plan export.
//!
//! - `PulldownExportService` - Markdown, HTML (pulldown-cmark) and PDF (printpdf)

mod pdf;
mod pulldown_export_service;

pub use pulldown_export_service::PulldownExportService;
