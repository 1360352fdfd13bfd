//! HTTP routes for intake endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_questions, submit_intake, IntakeHandlers};

/// Creates the intake router, nested under `/api/intake`.
pub fn intake_routes(handlers: IntakeHandlers) -> Router {
    Router::new()
        .route("/", post(submit_intake))
        .route("/questions", get(list_questions))
        .with_state(handlers)
}
