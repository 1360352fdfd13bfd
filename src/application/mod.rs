//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! All patient writes go through `PatientStore`.

pub mod handlers;
mod patient_store;

pub use handlers::*;
pub use patient_store::PatientStore;
