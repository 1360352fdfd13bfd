//! HTTP adapter for the intake questionnaire.

mod handlers;
mod routes;

pub use handlers::IntakeHandlers;
pub use routes::intake_routes;
