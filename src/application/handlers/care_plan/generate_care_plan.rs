//! GenerateCarePlanHandler - Drafts an adapted care plan for doctor review.

use std::sync::Arc;

use serde::Serialize;

use crate::application::PatientStore;
use crate::domain::foundation::{AuthenticatedUser, PatientId, Role};
use crate::domain::patient::{generate_care_plan, PatientError};
use crate::ports::GenerationDelay;

/// Command to draft a plan from the patient's life context.
#[derive(Debug, Clone)]
pub struct GenerateCarePlanCommand {
    pub user: AuthenticatedUser,
    pub patient_id: PatientId,
    /// Medications as currently edited by the doctor; the stored value is
    /// used when absent.
    pub medications: Option<String>,
}

/// The draft. Nothing is persisted until the doctor saves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCarePlan {
    pub patient_id: PatientId,
    pub care_plan: String,
}

pub struct GenerateCarePlanHandler {
    store: PatientStore,
    delay: Arc<dyn GenerationDelay>,
}

impl GenerateCarePlanHandler {
    pub fn new(store: PatientStore, delay: Arc<dyn GenerationDelay>) -> Self {
        Self { store, delay }
    }

    pub async fn handle(
        &self,
        cmd: GenerateCarePlanCommand,
    ) -> Result<GeneratedCarePlan, PatientError> {
        cmd.user.require_role(Role::Doctor)?;

        let patient = self
            .store
            .get_patient(&cmd.patient_id)
            .await?
            .ok_or_else(|| PatientError::not_found(cmd.patient_id.clone()))?;

        self.delay.wait().await;

        let medications = cmd
            .medications
            .as_deref()
            .unwrap_or_else(|| patient.medications());
        let care_plan = generate_care_plan(patient.life_context(), medications);

        tracing::debug!(
            patient_id = %cmd.patient_id,
            delay_ms = self.delay.duration().as_millis() as u64,
            "care plan drafted"
        );

        Ok(GeneratedCarePlan {
            patient_id: cmd.patient_id,
            care_plan,
        })
    }
}
