//! Patient Store - the only writer of patient records.
//!
//! Every life-context write goes through `add_patient`, which rebuilds the
//! conflict flags. `update_patient` takes a `PatientUpdate`, which has no
//! life-context, flag or status fields, so flags cannot drift from the
//! context they were computed from.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{AuthenticatedUser, PatientId};
use crate::domain::patient::{LifeContext, Patient, PatientError, PatientProfile, PatientUpdate};
use crate::ports::PatientRepository;

#[derive(Clone)]
pub struct PatientStore {
    repository: Arc<dyn PatientRepository>,
}

impl PatientStore {
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        Self { repository }
    }

    /// Writes `life_context` onto the record owned by `owner`, creating the
    /// record from the owner's identity when none exists yet.
    pub async fn add_patient(
        &self,
        owner: &AuthenticatedUser,
        life_context: LifeContext,
        today: NaiveDate,
    ) -> Result<Patient, PatientError> {
        let id = PatientId::for_user(&owner.id);

        match self.repository.find_by_id(&id).await? {
            Some(mut patient) => {
                patient.replace_life_context(life_context);
                self.repository.update(&patient).await?;
                tracing::info!(
                    patient_id = %id,
                    flag_count = patient.flag_count(),
                    "life context updated"
                );
                Ok(patient)
            }
            None => {
                let patient = Patient::new(
                    id.clone(),
                    PatientProfile::identity_only(owner.name.clone(), owner.email.clone()),
                    life_context,
                    today,
                );
                self.repository.save(&patient).await?;
                tracing::info!(
                    patient_id = %id,
                    flag_count = patient.flag_count(),
                    "patient record created from intake"
                );
                Ok(patient)
            }
        }
    }

    /// Merges `update` into the patient. `None` when the id is unknown; the
    /// store is left untouched in that case.
    pub async fn update_patient(
        &self,
        id: &PatientId,
        update: PatientUpdate,
    ) -> Result<Option<Patient>, PatientError> {
        let Some(mut patient) = self.repository.find_by_id(id).await? else {
            tracing::debug!(patient_id = %id, "update skipped, patient not found");
            return Ok(None);
        };

        patient.apply_update(update);
        self.repository.update(&patient).await?;
        Ok(Some(patient))
    }

    /// Applies `update` and marks the record reviewed, as one write.
    pub async fn review_patient(
        &self,
        id: &PatientId,
        update: PatientUpdate,
    ) -> Result<Option<Patient>, PatientError> {
        let Some(mut patient) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        patient.apply_update(update);
        patient.mark_reviewed()?;
        self.repository.update(&patient).await?;
        tracing::info!(patient_id = %id, "care plan saved, patient reviewed");
        Ok(Some(patient))
    }

    pub async fn get_patient(&self, id: &PatientId) -> Result<Option<Patient>, PatientError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// All patients in admission order.
    pub async fn list_patients(&self) -> Result<Vec<Patient>, PatientError> {
        Ok(self.repository.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPatientRepository;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::patient::{
        seed_patients, CommuteTime, FoodAccess, LivingSituation, PatientStatus, SleepHours,
        StressLevel, WorkSchedule,
    };

    fn seeded_store() -> PatientStore {
        PatientStore::new(Arc::new(InMemoryPatientRepository::with_patients(
            seed_patients().unwrap(),
        )))
    }

    fn owner(id: &str, name: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(id).unwrap(),
            name,
            format!("{}@example.com", id),
            Role::Patient,
        )
    }

    fn rotating_context() -> LifeContext {
        LifeContext::new(
            WorkSchedule::RotatingShifts,
            CommuteTime::OverTwoHours,
            FoodAccess::SkipsMeals,
            SleepHours::UnderFour,
            StressLevel::Overwhelmed,
            LivingSituation::WithRoommates,
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[tokio::test]
    async fn add_patient_recomputes_flags_on_existing_record() {
        let store = seeded_store();

        let patient = store
            .add_patient(&owner("p1", "Arjun Mehta"), rotating_context(), today())
            .await
            .unwrap();

        assert_eq!(patient.flag_count(), 5);
        assert_eq!(patient.condition(), "Type 2 Diabetes");
        assert_eq!(
            patient.created_at(),
            NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()
        );

        let stored = store
            .get_patient(&PatientId::new("p1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.life_context(), &rotating_context());
        assert_eq!(stored.conflict_flags(), patient.conflict_flags());
    }

    #[tokio::test]
    async fn add_patient_creates_record_for_new_owner() {
        let store = seeded_store();

        let patient = store
            .add_patient(&owner("p9", "Meera Iyer"), rotating_context(), today())
            .await
            .unwrap();

        assert_eq!(patient.id().as_str(), "p9");
        assert_eq!(patient.name(), "Meera Iyer");
        assert_eq!(patient.condition(), "");
        assert_eq!(patient.created_at(), today());
        assert_eq!(patient.status(), PatientStatus::Pending);
        assert_eq!(store.list_patients().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn get_unknown_patient_is_none_and_leaves_store_untouched() {
        let store = seeded_store();
        let before = store.list_patients().await.unwrap();

        let found = store
            .get_patient(&PatientId::new("p404").unwrap())
            .await
            .unwrap();

        assert!(found.is_none());
        assert_eq!(store.list_patients().await.unwrap(), before);
    }

    #[tokio::test]
    async fn update_unknown_patient_returns_none_without_mutation() {
        let store = seeded_store();
        let before = store.list_patients().await.unwrap();

        let result = store
            .update_patient(
                &PatientId::new("nobody").unwrap(),
                PatientUpdate {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.list_patients().await.unwrap(), before);
    }

    #[tokio::test]
    async fn update_merges_given_fields_only() {
        let store = seeded_store();
        let id = PatientId::new("p2").unwrap();
        let before = store.get_patient(&id).await.unwrap().unwrap();

        let after = store
            .update_patient(
                &id,
                PatientUpdate {
                    standard_care: Some("DASH diet".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(after.standard_care(), "DASH diet");
        assert_eq!(after.medications(), before.medications());
        assert_eq!(after.life_context(), before.life_context());
        assert_eq!(after.status(), before.status());
    }

    #[tokio::test]
    async fn review_patient_saves_plan_and_marks_reviewed() {
        let store = seeded_store();
        let id = PatientId::new("p3").unwrap();

        let reviewed = store
            .review_patient(
                &id,
                PatientUpdate {
                    adapted_care_plan: Some("🕐 MORNING ROUTINE\n• Stretch".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(reviewed.status(), PatientStatus::Reviewed);
        assert!(reviewed.has_care_plan());
        assert!(store
            .review_patient(&PatientId::new("p404").unwrap(), PatientUpdate::default())
            .await
            .unwrap()
            .is_none());
    }
}
