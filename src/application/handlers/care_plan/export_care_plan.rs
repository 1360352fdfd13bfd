//! ExportCarePlanHandler - Download a saved care plan.
//!
//! Export is refused while the plan is blank; the refusal carries the notice
//! for the caller's role.

use std::sync::Arc;

use crate::application::PatientStore;
use crate::domain::foundation::{AuthenticatedUser, PatientId, Role};
use crate::domain::patient::PatientError;
use crate::ports::{
    CarePlanDocument, CarePlanExportService, ExportError, ExportFormat, ExportedDocument,
};

#[derive(Debug, Clone)]
pub struct ExportCarePlanQuery {
    pub user: AuthenticatedUser,
    pub patient_id: PatientId,
    pub format: ExportFormat,
}

pub struct ExportCarePlanHandler {
    store: PatientStore,
    exporter: Arc<dyn CarePlanExportService>,
}

impl ExportCarePlanHandler {
    pub fn new(store: PatientStore, exporter: Arc<dyn CarePlanExportService>) -> Self {
        Self { store, exporter }
    }

    pub async fn handle(&self, query: ExportCarePlanQuery) -> Result<ExportedDocument, PatientError> {
        let role = query.user.role;
        if role == Role::Patient && query.patient_id != PatientId::for_user(&query.user.id) {
            return Err(PatientError::forbidden());
        }

        let patient = self
            .store
            .get_patient(&query.patient_id)
            .await?
            .ok_or_else(|| PatientError::not_found(query.patient_id.clone()))?;

        if !patient.has_care_plan() {
            tracing::debug!(patient_id = %query.patient_id, %role, "export refused, no care plan");
            return Err(PatientError::care_plan_missing(role));
        }

        let document =
            CarePlanDocument::from_patient(&patient).map_err(|e| export_failed(e, role))?;
        let exported = self
            .exporter
            .export(&document, query.format)
            .await
            .map_err(|e| export_failed(e, role))?;

        tracing::info!(
            patient_id = %query.patient_id,
            format = %query.format,
            bytes = exported.bytes.len(),
            "care plan exported"
        );

        Ok(exported)
    }
}

fn export_failed(err: ExportError, role: Role) -> PatientError {
    match err {
        ExportError::EmptyCarePlan => PatientError::care_plan_missing(role),
        ExportError::UnsupportedFormat(format) => {
            PatientError::validation("format", format!("Unsupported export format: {}", format))
        }
        other => {
            tracing::error!(error = %other, "care plan export failed");
            PatientError::infrastructure(other.to_string())
        }
    }
}
