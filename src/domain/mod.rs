//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, roles, errors, state machine)
//! - `patient` - Patient records, life context, conflict flags and care plans

pub mod foundation;
pub mod patient;
