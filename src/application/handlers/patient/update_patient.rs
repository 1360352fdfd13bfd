//! UpdatePatientHandler - Command handler for doctor edits to clinical fields.

use crate::application::PatientStore;
use crate::domain::foundation::{AuthenticatedUser, PatientId, Role};
use crate::domain::patient::{Patient, PatientError, PatientUpdate};

#[derive(Debug, Clone)]
pub struct UpdatePatientCommand {
    pub user: AuthenticatedUser,
    pub patient_id: PatientId,
    pub update: PatientUpdate,
}

pub struct UpdatePatientHandler {
    store: PatientStore,
}

impl UpdatePatientHandler {
    pub fn new(store: PatientStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdatePatientCommand) -> Result<Patient, PatientError> {
        cmd.user.require_role(Role::Doctor)?;

        self.store
            .update_patient(&cmd.patient_id, cmd.update)
            .await?
            .ok_or_else(|| PatientError::not_found(cmd.patient_id))
    }
}
