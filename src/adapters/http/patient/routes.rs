//! HTTP routes for patient endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    export_care_plan, flagged_patients, generate_care_plan, get_patient, list_patients,
    patient_stats, save_care_plan, update_patient, PatientHandlers,
};

/// Creates the doctor-facing router, nested under `/api/patients`.
pub fn patient_routes(handlers: PatientHandlers) -> Router {
    Router::new()
        .route("/", get(list_patients))
        .route("/stats", get(patient_stats))
        .route("/flagged", get(flagged_patients))
        .route("/:id", get(get_patient).patch(update_patient))
        .route("/:id/care-plan", put(save_care_plan))
        .route("/:id/care-plan/generate", post(generate_care_plan))
        .route("/:id/care-plan/export", get(export_care_plan))
        .with_state(handlers)
}
