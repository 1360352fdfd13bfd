//! HTTP routes for the patient's own endpoints.

use axum::{routing::get, Router};

use super::handlers::{export_my_care_plan, my_patient, MeHandlers};

/// Creates the patient self-service router, nested under `/api/me`.
pub fn me_routes(handlers: MeHandlers) -> Router {
    Router::new()
        .route("/patient", get(my_patient))
        .route("/care-plan/export", get(export_my_care_plan))
        .with_state(handlers)
}
