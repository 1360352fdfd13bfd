//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types and the state machine trait that form
//! the vocabulary of the CareFit domain.

mod auth;
mod errors;
mod ids;
mod state_machine;

pub use auth::{AuthError, AuthenticatedUser, Role};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PatientId, UserId};
pub use state_machine::StateMachine;
