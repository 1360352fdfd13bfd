//! In-Memory Patient Repository Adapter
//!
//! Keeps patient records in a vector so listing preserves insertion order.
//! Everything is lost when the process exits.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PatientId};
use crate::domain::patient::Patient;
use crate::ports::PatientRepository;

/// In-memory storage for patient records
#[derive(Debug, Clone, Default)]
pub struct InMemoryPatientRepository {
    patients: Arc<RwLock<Vec<Patient>>>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with `patients`, in the given order.
    pub fn with_patients(patients: Vec<Patient>) -> Self {
        Self {
            patients: Arc::new(RwLock::new(patients)),
        }
    }

    /// Number of stored patients
    pub async fn len(&self) -> usize {
        self.patients.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.patients.read().await.is_empty()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn save(&self, patient: &Patient) -> Result<(), DomainError> {
        let mut patients = self.patients.write().await;
        if patients.iter().any(|p| p.id() == patient.id()) {
            return Err(DomainError::validation(
                "id",
                format!("Patient {} already exists", patient.id()),
            ));
        }
        patients.push(patient.clone());
        Ok(())
    }

    async fn update(&self, patient: &Patient) -> Result<(), DomainError> {
        let mut patients = self.patients.write().await;
        let slot = patients
            .iter_mut()
            .find(|p| p.id() == patient.id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::PatientNotFound,
                    format!("Patient not found: {}", patient.id()),
                )
            })?;
        *slot = patient.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &PatientId) -> Result<Option<Patient>, DomainError> {
        let patients = self.patients.read().await;
        Ok(patients.iter().find(|p| p.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Patient>, DomainError> {
        Ok(self.patients.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::{seed_patients, PatientUpdate};

    fn seeded() -> InMemoryPatientRepository {
        InMemoryPatientRepository::with_patients(seed_patients().unwrap())
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_patient() {
        let repo = seeded();
        let found = repo
            .find_by_id(&PatientId::new("p404").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
        assert_eq!(repo.len().await, 3);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = InMemoryPatientRepository::new();
        assert!(repo.is_empty().await);
        let mut patients = seed_patients().unwrap();
        patients.reverse();
        for patient in &patients {
            repo.save(patient).await.unwrap();
        }

        let ids: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, vec!["p3", "p2", "p1"]);
    }

    #[tokio::test]
    async fn save_rejects_duplicate_id() {
        let repo = seeded();
        let duplicate = seed_patients().unwrap().remove(0);
        let err = repo.save(&duplicate).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn update_replaces_stored_record() {
        let repo = seeded();
        let id = PatientId::new("p2").unwrap();
        let mut patient = repo.find_by_id(&id).await.unwrap().unwrap();
        patient.apply_update(PatientUpdate {
            condition: Some("Stage 1 Hypertension".to_string()),
            ..Default::default()
        });

        repo.update(&patient).await.unwrap();

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.condition(), "Stage 1 Hypertension");
        assert_eq!(repo.list().await.unwrap()[1].id(), &id);
    }

    #[tokio::test]
    async fn update_of_missing_patient_fails() {
        let repo = InMemoryPatientRepository::new();
        let patient = seed_patients().unwrap().remove(0);
        let err = repo.update(&patient).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PatientNotFound);
        assert!(repo.is_empty().await);
    }
}
