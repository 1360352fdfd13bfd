//! HTTP DTOs for patient and care-plan endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::patient::{PatientFilter, PatientStats};
use crate::domain::patient::{LifeContext, Patient, PatientStatus, PatientUpdate, Severity};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Query string for `GET /api/patients`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPatientsParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub filter: PatientFilter,
}

/// Body for `PATCH /api/patients/:id`. Life context, flags and status are
/// not editable here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub condition: Option<String>,
    pub age: Option<u32>,
    pub medications: Option<String>,
    pub standard_care: Option<String>,
    pub adapted_care_plan: Option<String>,
}

impl From<UpdatePatientRequest> for PatientUpdate {
    fn from(req: UpdatePatientRequest) -> Self {
        PatientUpdate {
            name: req.name,
            email: req.email,
            condition: req.condition,
            age: req.age,
            medications: req.medications,
            standard_care: req.standard_care,
            adapted_care_plan: req.adapted_care_plan,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateCarePlanRequest {
    /// Medications as edited in the review form.
    #[serde(default)]
    pub medications: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveCarePlanRequest {
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub medications: Option<String>,
    #[serde(default)]
    pub standard_care: Option<String>,
    pub care_plan: String,
}

/// Query string for export endpoints; markdown when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportParams {
    #[serde(default)]
    pub format: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// Full patient record.
#[derive(Debug, Clone, Serialize)]
pub struct PatientResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub condition: String,
    pub age: Option<u32>,
    pub medications: String,
    pub standard_care: String,
    pub life_context: LifeContext,
    pub conflict_flags: Vec<String>,
    pub adapted_care_plan: String,
    pub status: PatientStatus,
    pub status_label: &'static str,
    pub severity: Severity,
    pub severity_label: &'static str,
    pub created_at: NaiveDate,
}

impl From<&Patient> for PatientResponse {
    fn from(p: &Patient) -> Self {
        Self {
            id: p.id().to_string(),
            name: p.name().to_string(),
            email: p.email().to_string(),
            condition: p.condition().to_string(),
            age: p.age(),
            medications: p.medications().to_string(),
            standard_care: p.standard_care().to_string(),
            life_context: *p.life_context(),
            conflict_flags: p.conflict_flags().to_vec(),
            adapted_care_plan: p.adapted_care_plan().to_string(),
            status: p.status(),
            status_label: p.status().label(),
            severity: p.severity(),
            severity_label: p.severity().label(),
            created_at: p.created_at(),
        }
    }
}

/// Row in the doctor's patient table.
#[derive(Debug, Clone, Serialize)]
pub struct PatientSummaryResponse {
    pub id: String,
    pub name: String,
    pub condition: String,
    pub age: Option<u32>,
    pub status: PatientStatus,
    pub severity: Severity,
    pub flag_count: usize,
    pub conflict_flags: Vec<String>,
    pub created_at: NaiveDate,
}

impl From<&Patient> for PatientSummaryResponse {
    fn from(p: &Patient) -> Self {
        Self {
            id: p.id().to_string(),
            name: p.name().to_string(),
            condition: p.condition().to_string(),
            age: p.age(),
            status: p.status(),
            severity: p.severity(),
            flag_count: p.flag_count(),
            conflict_flags: p.conflict_flags().to_vec(),
            created_at: p.created_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientListResponse {
    pub patients: Vec<PatientSummaryResponse>,
    pub total: usize,
}

impl From<Vec<Patient>> for PatientListResponse {
    fn from(patients: Vec<Patient>) -> Self {
        let patients: Vec<PatientSummaryResponse> =
            patients.iter().map(PatientSummaryResponse::from).collect();
        Self {
            total: patients.len(),
            patients,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientStatsResponse {
    pub total: usize,
    pub pending_review: usize,
    pub flagged: usize,
}

impl From<PatientStats> for PatientStatsResponse {
    fn from(stats: PatientStats) -> Self {
        Self {
            total: stats.total,
            pending_review: stats.pending_review,
            flagged: stats.flagged,
        }
    }
}
