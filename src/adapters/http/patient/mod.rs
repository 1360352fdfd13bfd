//! HTTP adapter for the doctor's patient and care-plan endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ExportParams, GenerateCarePlanRequest, ListPatientsParams, PatientListResponse,
    PatientResponse, PatientStatsResponse, PatientSummaryResponse, SaveCarePlanRequest,
    UpdatePatientRequest,
};
pub use handlers::PatientHandlers;
pub(crate) use handlers::{export_response, parse_export_format};
pub use routes::patient_routes;
