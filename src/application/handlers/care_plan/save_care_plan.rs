//! SaveCarePlanHandler - "Save & send": store the plan and mark the patient reviewed.

use crate::application::PatientStore;
use crate::domain::foundation::{AuthenticatedUser, PatientId, Role};
use crate::domain::patient::{Patient, PatientError, PatientUpdate};

#[derive(Debug, Clone)]
pub struct SaveCarePlanCommand {
    pub user: AuthenticatedUser,
    pub patient_id: PatientId,
    pub condition: Option<String>,
    pub medications: Option<String>,
    pub standard_care: Option<String>,
    pub care_plan: String,
}

impl SaveCarePlanCommand {
    fn into_update(self) -> (PatientId, PatientUpdate) {
        (
            self.patient_id,
            PatientUpdate {
                condition: self.condition,
                medications: self.medications,
                standard_care: self.standard_care,
                adapted_care_plan: Some(self.care_plan),
                ..Default::default()
            },
        )
    }
}

pub struct SaveCarePlanHandler {
    store: PatientStore,
}

impl SaveCarePlanHandler {
    pub fn new(store: PatientStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SaveCarePlanCommand) -> Result<Patient, PatientError> {
        cmd.user.require_role(Role::Doctor)?;

        let (patient_id, update) = cmd.into_update();
        self.store
            .review_patient(&patient_id, update)
            .await?
            .ok_or_else(|| PatientError::not_found(patient_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPatientRepository;
    use crate::domain::foundation::UserId;
    use crate::domain::patient::{seed_patients, PatientStatus};
    use std::sync::Arc;

    fn doctor() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("d1").unwrap(),
            "Dr. Priya Sharma",
            "drpriya@example.com",
            Role::Doctor,
        )
    }

    fn command(id: &str) -> SaveCarePlanCommand {
        SaveCarePlanCommand {
            user: doctor(),
            patient_id: PatientId::new(id).unwrap(),
            condition: Some("Type 2 Diabetes, early neuropathy".to_string()),
            medications: None,
            standard_care: None,
            care_plan: "💊 MEDICATION SCHEDULE\n• Evening dose with dinner".to_string(),
        }
    }

    #[tokio::test]
    async fn saves_plan_and_marks_reviewed() {
        let store = PatientStore::new(Arc::new(InMemoryPatientRepository::with_patients(
            seed_patients().unwrap(),
        )));
        let handler = SaveCarePlanHandler::new(store.clone());

        let saved = handler.handle(command("p1")).await.unwrap();

        assert_eq!(saved.status(), PatientStatus::Reviewed);
        assert_eq!(saved.condition(), "Type 2 Diabetes, early neuropathy");
        assert_eq!(saved.medications(), "Metformin 500mg twice daily");
        assert!(saved.adapted_care_plan().contains("Evening dose"));
        assert_eq!(
            store.get_patient(saved.id()).await.unwrap().as_ref(),
            Some(&saved)
        );
    }

    #[tokio::test]
    async fn saving_twice_keeps_reviewed() {
        let store = PatientStore::new(Arc::new(InMemoryPatientRepository::with_patients(
            seed_patients().unwrap(),
        )));
        let handler = SaveCarePlanHandler::new(store);

        handler.handle(command("p2")).await.unwrap();
        let again = handler.handle(command("p2")).await.unwrap();

        assert_eq!(again.status(), PatientStatus::Reviewed);
    }

    #[tokio::test]
    async fn unknown_patient_is_not_found() {
        let handler = SaveCarePlanHandler::new(PatientStore::new(Arc::new(
            InMemoryPatientRepository::new(),
        )));

        let result = handler.handle(command("p1")).await;

        assert!(matches!(result, Err(PatientError::NotFound(_))));
    }
}
