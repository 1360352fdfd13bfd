//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Mock identity provider
//! - `delay` - Care-plan generation delays
//! - `document` - Care-plan export (Markdown, HTML, PDF)
//! - `http` - axum REST API and auth middleware
//! - `memory` - In-memory patient repository
//! - `session` - In-memory single-session store

pub mod auth;
pub mod delay;
pub mod document;
pub mod http;
pub mod memory;
pub mod session;

pub use auth::MockIdentityProvider;
pub use delay::{ImmediateGenerationDelay, TokioGenerationDelay};
pub use document::PulldownExportService;
pub use memory::InMemoryPatientRepository;
pub use session::InMemorySessionStore;
