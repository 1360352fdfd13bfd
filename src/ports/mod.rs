//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage
//!
//! - `PatientRepository` - Patient record persistence
//!
//! ## Identity
//!
//! - `IdentityProvider` - Sign-in by role
//! - `SessionStore` - The single active session
//! - `SessionValidator` - Bearer token validation
//!
//! ## Care plans
//!
//! - `GenerationDelay` - Pause before a generated plan is returned
//! - `CarePlanExportService` - Markdown, HTML and PDF export

mod care_plan_export_service;
mod generation_delay;
mod identity_provider;
mod patient_repository;
mod session_store;
mod session_validator;

pub use care_plan_export_service::{
    CarePlanDocument, CarePlanExportService, ExportError, ExportFormat, ExportedDocument,
};
pub use generation_delay::GenerationDelay;
pub use identity_provider::IdentityProvider;
pub use patient_repository::PatientRepository;
pub use session_store::{ActiveSession, SessionStore};
pub use session_validator::SessionValidator;
