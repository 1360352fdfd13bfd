//! Error responses shared by every HTTP module.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::AuthError;
use crate::domain::patient::PatientError;

/// Error body: `{"code": "...", "message": "...", "details": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new("FORBIDDEN", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    /// The request is valid but the record is not ready for it yet.
    pub fn conflict(code: &str, message: impl Into<String>) -> Self {
        Self::new(code, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new("SERVICE_UNAVAILABLE", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

pub(crate) fn error_response(status: StatusCode, body: ErrorResponse) -> Response {
    (status, Json(body)).into_response()
}

pub(crate) fn handle_patient_error(error: PatientError) -> Response {
    match error {
        PatientError::NotFound(id) => error_response(
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found("Patient", id.as_str()),
        ),
        PatientError::Unauthorized => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Authentication required"),
        ),
        PatientError::Forbidden => error_response(
            StatusCode::FORBIDDEN,
            ErrorResponse::forbidden("Permission denied"),
        ),
        PatientError::CarePlanMissing(notice) => error_response(
            StatusCode::CONFLICT,
            ErrorResponse::conflict("CARE_PLAN_MISSING", notice),
        ),
        PatientError::ValidationFailed { field, message } => error_response(
            StatusCode::BAD_REQUEST,
            ErrorResponse::bad_request(format!("Validation failed for {}: {}", field, message))
                .with_details(serde_json::json!({ "field": field })),
        ),
        PatientError::InvalidState(msg) => {
            error_response(StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
        }
        PatientError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "request failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal(msg),
            )
        }
    }
}

pub(crate) fn handle_auth_error(error: AuthError) -> Response {
    match error {
        AuthError::InvalidToken => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Invalid or expired session"),
        ),
        AuthError::InsufficientPermissions => error_response(
            StatusCode::FORBIDDEN,
            ErrorResponse::forbidden("Permission denied"),
        ),
        AuthError::UnknownRole(role) => error_response(
            StatusCode::BAD_REQUEST,
            ErrorResponse::bad_request(format!("No identity available for role '{}'", role)),
        ),
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!(error = %msg, "identity service unavailable");
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::service_unavailable("Identity service unavailable"),
            )
        }
    }
}
