//! Patient-specific error types.

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, PatientId, Role, ValidationError};

/// Notice shown to a doctor exporting a record without a plan.
pub const DOCTOR_EXPORT_NOTICE: &str = "Generate a care plan first";

/// Notice shown to a patient whose plan has not been written yet.
pub const PATIENT_EXPORT_NOTICE: &str =
    "No care plan available yet. Your doctor will generate one soon.";

/// Patient-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientError {
    /// Patient record was not found.
    NotFound(PatientId),
    /// No valid sign-in.
    Unauthorized,
    /// Signed in, but not allowed to do this.
    Forbidden,
    /// Export requested before a care plan exists. Carries the user-facing notice.
    CarePlanMissing(String),
    /// Invalid state for operation.
    InvalidState(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl PatientError {
    pub fn not_found(id: PatientId) -> Self {
        PatientError::NotFound(id)
    }
    pub fn forbidden() -> Self {
        PatientError::Forbidden
    }
    /// Missing-plan error worded for the role that asked.
    pub fn care_plan_missing(role: Role) -> Self {
        let notice = match role {
            Role::Doctor => DOCTOR_EXPORT_NOTICE,
            Role::Patient => PATIENT_EXPORT_NOTICE,
        };
        PatientError::CarePlanMissing(notice.to_string())
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        PatientError::InvalidState(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PatientError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        PatientError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            PatientError::NotFound(_) => ErrorCode::PatientNotFound,
            PatientError::Unauthorized => ErrorCode::Unauthorized,
            PatientError::Forbidden => ErrorCode::Forbidden,
            PatientError::CarePlanMissing(_) => ErrorCode::CarePlanMissing,
            PatientError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            PatientError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PatientError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            PatientError::NotFound(id) => format!("Patient not found: {}", id),
            PatientError::Unauthorized => "Authentication required".to_string(),
            PatientError::Forbidden => "Permission denied".to_string(),
            PatientError::CarePlanMissing(notice) => notice.clone(),
            PatientError::InvalidState(msg) => format!("Invalid state: {}", msg),
            PatientError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PatientError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PatientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PatientError {}

impl From<ValidationError> for PatientError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        PatientError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl From<AuthError> for PatientError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken => PatientError::Unauthorized,
            AuthError::InsufficientPermissions => PatientError::Forbidden,
            AuthError::UnknownRole(_) => PatientError::validation("role", err.to_string()),
            AuthError::ServiceUnavailable(msg) => PatientError::Infrastructure(msg),
        }
    }
}

impl From<DomainError> for PatientError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Unauthorized => PatientError::Unauthorized,
            ErrorCode::Forbidden => PatientError::Forbidden,
            ErrorCode::InvalidStateTransition => PatientError::InvalidState(err.to_string()),
            ErrorCode::CarePlanMissing => PatientError::CarePlanMissing(err.message),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                PatientError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => PatientError::Infrastructure(err.to_string()),
        }
    }
}
