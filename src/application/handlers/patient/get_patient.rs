//! GetPatientHandler - Query handler for a single patient record.

use crate::application::PatientStore;
use crate::domain::foundation::{AuthenticatedUser, PatientId, Role};
use crate::domain::patient::{Patient, PatientError};

#[derive(Debug, Clone)]
pub struct GetPatientQuery {
    pub user: AuthenticatedUser,
    pub patient_id: PatientId,
}

/// Doctors may read any record; a patient only their own.
pub struct GetPatientHandler {
    store: PatientStore,
}

impl GetPatientHandler {
    pub fn new(store: PatientStore) -> Self {
        Self { store }
    }

    /// `Ok(None)` when no record has the id.
    pub async fn handle(&self, query: GetPatientQuery) -> Result<Option<Patient>, PatientError> {
        if query.user.role == Role::Patient
            && query.patient_id != PatientId::for_user(&query.user.id)
        {
            return Err(PatientError::forbidden());
        }

        self.store.get_patient(&query.patient_id).await
    }
}
