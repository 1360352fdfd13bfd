//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with DTOs, handlers and routes; `api_router`
//! mounts them all behind the auth middleware.
//!
//! | Prefix | Module |
//! |---|---|
//! | `/api/session` | `session` |
//! | `/api/intake` | `intake` |
//! | `/api/patients` | `patient` (doctor) |
//! | `/api/me` | `me` (patient) |

pub mod error;
pub mod intake;
pub mod me;
pub mod middleware;
pub mod patient;
pub mod session;

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use serde_json::json;

use crate::application::handlers::care_plan::{
    ExportCarePlanHandler, GenerateCarePlanHandler, SaveCarePlanHandler,
};
use crate::application::handlers::intake::SubmitLifeContextHandler;
use crate::application::handlers::patient::{
    GetPatientHandler, ListFlaggedHandler, ListPatientsHandler, PatientStatsHandler,
    UpdatePatientHandler,
};
use crate::application::handlers::session::{
    GetCurrentSessionHandler, LoginHandler, LogoutHandler,
};
use crate::application::PatientStore;
use crate::ports::{
    CarePlanExportService, GenerationDelay, IdentityProvider, PatientRepository, SessionStore,
    SessionValidator,
};

pub use error::ErrorResponse;
pub use intake::{intake_routes, IntakeHandlers};
pub use me::{me_routes, MeHandlers};
pub use middleware::{auth_middleware, AuthState, RequireAuth, SessionToken};
pub use patient::{patient_routes, PatientHandlers};
pub use session::{session_routes, SessionHandlers};

/// Port implementations the API is wired from.
#[derive(Clone)]
pub struct ApiServices {
    pub patients: Arc<dyn PatientRepository>,
    pub identity: Arc<dyn IdentityProvider>,
    pub sessions: Arc<dyn SessionStore>,
    pub validator: Arc<dyn SessionValidator>,
    pub delay: Arc<dyn GenerationDelay>,
    pub exporter: Arc<dyn CarePlanExportService>,
}

/// GET /health - Liveness
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the complete API router.
pub fn api_router(services: ApiServices) -> Router {
    let store = PatientStore::new(services.patients.clone());

    let get_handler = Arc::new(GetPatientHandler::new(store.clone()));
    let export_handler = Arc::new(ExportCarePlanHandler::new(
        store.clone(),
        services.exporter.clone(),
    ));

    let session_handlers = SessionHandlers::new(
        Arc::new(LoginHandler::new(
            services.identity.clone(),
            services.sessions.clone(),
        )),
        Arc::new(LogoutHandler::new(services.sessions.clone())),
        Arc::new(GetCurrentSessionHandler::new(services.sessions.clone())),
    );

    let intake_handlers = IntakeHandlers::new(Arc::new(SubmitLifeContextHandler::new(
        store.clone(),
        services.sessions.clone(),
    )));

    let patient_handlers = PatientHandlers::new(
        get_handler.clone(),
        Arc::new(ListPatientsHandler::new(store.clone())),
        Arc::new(PatientStatsHandler::new(store.clone())),
        Arc::new(ListFlaggedHandler::new(store.clone())),
        Arc::new(UpdatePatientHandler::new(store.clone())),
        Arc::new(GenerateCarePlanHandler::new(
            store.clone(),
            services.delay.clone(),
        )),
        Arc::new(SaveCarePlanHandler::new(store)),
        export_handler.clone(),
    );

    let me_handlers = MeHandlers::new(get_handler, export_handler);

    let validator: AuthState = services.validator;

    Router::new()
        .nest("/api/session", session_routes(session_handlers))
        .nest("/api/intake", intake_routes(intake_handlers))
        .nest("/api/patients", patient_routes(patient_handlers))
        .nest("/api/me", me_routes(me_handlers))
        .layer(from_fn_with_state(validator, auth_middleware))
        .route("/health", get(health))
}
