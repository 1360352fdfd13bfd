//! HTTP handlers for the doctor's patient and care-plan endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, handle_patient_error, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::care_plan::{
    ExportCarePlanHandler, ExportCarePlanQuery, GenerateCarePlanCommand, GenerateCarePlanHandler,
    SaveCarePlanCommand, SaveCarePlanHandler,
};
use crate::application::handlers::patient::{
    GetPatientHandler, GetPatientQuery, ListFlaggedHandler, ListFlaggedQuery,
    ListPatientsHandler, ListPatientsQuery, PatientStatsHandler, PatientStatsQuery,
    UpdatePatientCommand, UpdatePatientHandler,
};
use crate::domain::foundation::PatientId;
use crate::ports::{ExportFormat, ExportedDocument};

use super::dto::{
    ExportParams, GenerateCarePlanRequest, ListPatientsParams, PatientListResponse,
    PatientResponse, PatientStatsResponse, SaveCarePlanRequest, UpdatePatientRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PatientHandlers {
    get_handler: Arc<GetPatientHandler>,
    list_handler: Arc<ListPatientsHandler>,
    stats_handler: Arc<PatientStatsHandler>,
    flagged_handler: Arc<ListFlaggedHandler>,
    update_handler: Arc<UpdatePatientHandler>,
    generate_handler: Arc<GenerateCarePlanHandler>,
    save_handler: Arc<SaveCarePlanHandler>,
    export_handler: Arc<ExportCarePlanHandler>,
}

impl PatientHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_handler: Arc<GetPatientHandler>,
        list_handler: Arc<ListPatientsHandler>,
        stats_handler: Arc<PatientStatsHandler>,
        flagged_handler: Arc<ListFlaggedHandler>,
        update_handler: Arc<UpdatePatientHandler>,
        generate_handler: Arc<GenerateCarePlanHandler>,
        save_handler: Arc<SaveCarePlanHandler>,
        export_handler: Arc<ExportCarePlanHandler>,
    ) -> Self {
        Self {
            get_handler,
            list_handler,
            stats_handler,
            flagged_handler,
            update_handler,
            generate_handler,
            save_handler,
            export_handler,
        }
    }
}

fn parse_patient_id(raw: String) -> Result<PatientId, Response> {
    raw.parse::<PatientId>().map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            ErrorResponse::bad_request("Invalid patient ID"),
        )
    })
}

pub(crate) fn parse_export_format(params: &ExportParams) -> Result<ExportFormat, Response> {
    match params.format.as_deref() {
        None => Ok(ExportFormat::default()),
        Some(raw) => raw.parse::<ExportFormat>().map_err(|e| {
            error_response(StatusCode::BAD_REQUEST, ErrorResponse::bad_request(e.to_string()))
        }),
    }
}

/// Download response: content type plus attachment filename.
pub(crate) fn export_response(document: ExportedDocument) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.filename),
            ),
        ],
        document.bytes,
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Dashboard
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/patients - List patients, with search and risk filter
pub async fn list_patients(
    State(handlers): State<PatientHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListPatientsParams>,
) -> Response {
    let query = ListPatientsQuery {
        user,
        search: params.search,
        filter: params.filter,
    };

    match handlers.list_handler.handle(query).await {
        Ok(patients) => (StatusCode::OK, Json(PatientListResponse::from(patients))).into_response(),
        Err(e) => handle_patient_error(e),
    }
}

/// GET /api/patients/stats - Dashboard counters
pub async fn patient_stats(
    State(handlers): State<PatientHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.stats_handler.handle(PatientStatsQuery { user }).await {
        Ok(stats) => (StatusCode::OK, Json(PatientStatsResponse::from(stats))).into_response(),
        Err(e) => handle_patient_error(e),
    }
}

/// GET /api/patients/flagged - Patients with three or more conflict flags
pub async fn flagged_patients(
    State(handlers): State<PatientHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.flagged_handler.handle(ListFlaggedQuery { user }).await {
        Ok(patients) => (StatusCode::OK, Json(PatientListResponse::from(patients))).into_response(),
        Err(e) => handle_patient_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Single record
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/patients/:id - Full record
pub async fn get_patient(
    State(handlers): State<PatientHandlers>,
    RequireAuth(user): RequireAuth,
    Path(patient_id): Path<String>,
) -> Response {
    let patient_id = match parse_patient_id(patient_id) {
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

/// PATCH /api/patients/:id - Edit clinical fields
pub async fn update_patient(
    State(handlers): State<PatientHandlers>,
    RequireAuth(user): RequireAuth,
    Path(patient_id): Path<String>,
    Json(req): Json<UpdatePatientRequest>,
) -> Response {
    let patient_id = match parse_patient_id(patient_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdatePatientCommand {
        user,
        patient_id,
        update: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(patient) => (StatusCode::OK, Json(PatientResponse::from(&patient))).into_response(),
        Err(e) => handle_patient_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Care plan
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/patients/:id/care-plan/generate - Draft a plan (not saved)
pub async fn generate_care_plan(
    State(handlers): State<PatientHandlers>,
    RequireAuth(user): RequireAuth,
    Path(patient_id): Path<String>,
    Json(req): Json<GenerateCarePlanRequest>,
) -> Response {
    let patient_id = match parse_patient_id(patient_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = GenerateCarePlanCommand {
        user,
        patient_id,
        medications: req.medications,
    };

    match handlers.generate_handler.handle(cmd).await {
        Ok(draft) => (StatusCode::OK, Json(draft)).into_response(),
        Err(e) => handle_patient_error(e),
    }
}

/// PUT /api/patients/:id/care-plan - Save & send, marks the patient reviewed
pub async fn save_care_plan(
    State(handlers): State<PatientHandlers>,
    RequireAuth(user): RequireAuth,
    Path(patient_id): Path<String>,
    Json(req): Json<SaveCarePlanRequest>,
) -> Response {
    let patient_id = match parse_patient_id(patient_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SaveCarePlanCommand {
        user,
        patient_id,
        condition: req.condition,
        medications: req.medications,
        standard_care: req.standard_care,
        care_plan: req.care_plan,
    };

    match handlers.save_handler.handle(cmd).await {
        Ok(patient) => (StatusCode::OK, Json(PatientResponse::from(&patient))).into_response(),
        Err(e) => handle_patient_error(e),
    }
}

/// GET /api/patients/:id/care-plan/export?format= - Download the saved plan
pub async fn export_care_plan(
    State(handlers): State<PatientHandlers>,
    RequireAuth(user): RequireAuth,
    Path(patient_id): Path<String>,
    Query(params): Query<ExportParams>,
) -> Response {
    let patient_id = match parse_patient_id(patient_id) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_format_defaults_to_markdown() {
        let format = parse_export_format(&ExportParams::default()).unwrap();
        assert_eq!(format, ExportFormat::Markdown);
    }

    #[test]
    fn unknown_export_format_is_400() {
        let params = ExportParams {
            format: Some("docx".to_string()),
        };
        let response = parse_export_format(&params).unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn export_response_sets_attachment_headers() {
        let response = export_response(ExportedDocument::new(
            ExportFormat::Markdown,
            "care-plan-p1",
            b"plan".to_vec(),
        ));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"care-plan-p1.md\""
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );
    }

    #[test]
    fn blank_patient_id_is_400() {
        let response = parse_patient_id("  ".to_string()).unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
