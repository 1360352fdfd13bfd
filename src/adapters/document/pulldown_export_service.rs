//! HTML and PDF rendering for care-plan downloads.
//!
//! HTML goes through pulldown-cmark from the document's markdown, so the
//! plan stays inside a `<pre>` block with its line breaks and pictograms.
//! PDF is laid out directly with printpdf (see `pdf`).

use async_trait::async_trait;
use pulldown_cmark::{html, Options, Parser};

use super::pdf::render_pdf;
use crate::ports::{CarePlanDocument, CarePlanExportService, ExportError, ExportFormat};

#[derive(Debug, Clone)]
pub struct PulldownExportService {
    stylesheet: Option<&'static str>,
}

impl PulldownExportService {
    pub fn new() -> Self {
        Self {
            stylesheet: Some(CARE_PLAN_CSS),
        }
    }

    /// Bare HTML without the embedded stylesheet.
    pub fn unstyled() -> Self {
        Self { stylesheet: None }
    }

    fn page(&self, title: &str, body: &str) -> String {
        let mut page = String::with_capacity(body.len() + 2048);
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("<meta charset=\"utf-8\">\n");
        page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        page.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        if let Some(css) = self.stylesheet {
            page.push_str("<style>");
            page.push_str(css);
            page.push_str("</style>\n");
        }
        page.push_str("</head>\n<body>\n<article class=\"care-plan\">\n");
        page.push_str(body);
        page.push_str("</article>\n</body>\n</html>\n");
        page
    }
}

impl Default for PulldownExportService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CarePlanExportService for PulldownExportService {
    async fn to_pdf(&self, document: &CarePlanDocument) -> Result<Vec<u8>, ExportError> {
        render_pdf(document)
    }

    async fn to_html(&self, document: &CarePlanDocument) -> Result<String, ExportError> {
        let markdown = document.to_markdown();
        let mut body = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut body, Parser::new_ext(&markdown, Options::empty()));

        if body.trim().is_empty() {
            return Err(ExportError::render(ExportFormat::Html, "markdown produced no HTML"));
        }
        Ok(self.page(&document.title(), &body))
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

const CARE_PLAN_CSS: &str = r#"
body { font-family: system-ui, "Segoe UI", Roboto, Arial, sans-serif; color: #1f2937; line-height: 1.55; max-width: 52rem; margin: 2rem auto; padding: 0 1.5rem; }
h1 { font-size: 1.8rem; border-bottom: 2px solid #0d9488; }
h2 { font-size: 1.3rem; margin-top: 1.75em; border-bottom: 1px solid #e5e7eb; }
pre { background: #f0fdfa; border-left: 4px solid #0d9488; padding: 0.75rem 1rem; white-space: pre-wrap; font-family: inherit; }
@media print { body { margin: 0; } pre { break-inside: avoid; } }
"#;
