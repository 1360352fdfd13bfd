//! HTTP handlers for the signed-in patient's own record.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, handle_patient_error, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::patient::{
    export_response, parse_export_format, ExportParams, PatientResponse,
};
use crate::application::handlers::care_plan::{ExportCarePlanHandler, ExportCarePlanQuery};
use crate::application::handlers::patient::{GetPatientHandler, GetPatientQuery};
use crate::domain::foundation::{AuthenticatedUser, PatientId};

#[derive(Clone)]
pub struct MeHandlers {
    get_handler: Arc<GetPatientHandler>,
    export_handler: Arc<ExportCarePlanHandler>,
}

impl MeHandlers {
    pub fn new(
        get_handler: Arc<GetPatientHandler>,
        export_handler: Arc<ExportCarePlanHandler>,
    ) -> Self {
        Self {
            get_handler,
            export_handler,
        }
    }
}

fn own_record(user: &AuthenticatedUser) -> Result<PatientId, Response> {
    if !user.is_patient() {
        return Err(error_response(
            StatusCode::FORBIDDEN,
            ErrorResponse::forbidden("Only patients have a personal record"),
        ));
    }
    Ok(PatientId::for_user(&user.id))
}

/// GET /api/me/patient - Own life context, flags and plan
pub async fn my_patient(
    State(handlers): State<MeHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let patient_id = match own_record(&user) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetPatientQuery {
        user,
        patient_id: patient_id.clone(),
    };

    match handlers.get_handler.handle(query).await {
        Ok(Some(patient)) => (StatusCode::OK, Json(PatientResponse::from(&patient))).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found("Patient", patient_id.as_str()),
        ),
        Err(e) => handle_patient_error(e),
    }
}

/// GET /api/me/care-plan/export?format= - Download own plan
pub async fn export_my_care_plan(
    State(handlers): State<MeHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ExportParams>,
) -> Response {
    let patient_id = match own_record(&user) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let format = match parse_export_format(&params) {
        Ok(format) => format,
        Err(response) => return response,
    };

    let query = ExportCarePlanQuery {
        user,
        patient_id,
        format,
    };

    match handlers.export_handler.handle(query).await {
        Ok(document) => export_response(document),
        Err(e) => handle_patient_error(e),
    }
}
