//! ListPatientsHandler - Query handler for the doctor's patient list.

use serde::Deserialize;

use crate::application::PatientStore;
use crate::domain::foundation::{AuthenticatedUser, Role};
use crate::domain::patient::{Patient, PatientError, Severity};

/// Which patients the list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientFilter {
    #[default]
    All,
    /// High risk only.
    Flagged,
}

#[derive(Debug, Clone)]
pub struct ListPatientsQuery {
    pub user: AuthenticatedUser,
    pub search: Option<String>,
    pub filter: PatientFilter,
}

pub struct ListPatientsHandler {
    store: PatientStore,
}

impl ListPatientsHandler {
    pub fn new(store: PatientStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListPatientsQuery) -> Result<Vec<Patient>, PatientError> {
        query.user.require_role(Role::Doctor)?;

        let search = query.search.unwrap_or_default();
        let patients = self
            .store
            .list_patients()
            .await?
            .into_iter()
            .filter(|p| p.matches_search(&search))
            .filter(|p| match query.filter {
                PatientFilter::All => true,
                PatientFilter::Flagged => p.severity() == Severity::High,
            })
            .collect();

        Ok(patients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPatientRepository;
    use crate::domain::foundation::UserId;
    use crate::domain::patient::seed_patients;
    use std::sync::Arc;

    fn handler() -> ListPatientsHandler {
        ListPatientsHandler::new(PatientStore::new(Arc::new(
            InMemoryPatientRepository::with_patients(seed_patients().unwrap()),
        )))
    }

    fn doctor() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("d1").unwrap(),
            "Dr. Priya Sharma",
            "drpriya@example.com",
            Role::Doctor,
        )
    }

    fn names(patients: &[Patient]) -> Vec<&str> {
        patients.iter().map(|p| p.name()).collect()
    }

    async fn list(search: Option<&str>, filter: PatientFilter) -> Vec<Patient> {
        handler()
            .handle(ListPatientsQuery {
                user: doctor(),
                search: search.map(str::to_string),
                filter,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn lists_all_in_admission_order() {
        let patients = list(None, PatientFilter::All).await;
        assert_eq!(
            names(&patients),
            vec!["Arjun Mehta", "Sanya Kapoor", "Ravi Kumar"]
        );
    }

    #[tokio::test]
    async fn search_matches_name_or_condition_ignoring_case() {
        assert_eq!(
            names(&list(Some("HYPERTENSION"), PatientFilter::All).await),
            vec!["Sanya Kapoor"]
        );
        assert_eq!(
            names(&list(Some("ravi"), PatientFilter::All).await),
            vec!["Ravi Kumar"]
        );
    }

    #[tokio::test]
    async fn flagged_filter_keeps_high_risk_only() {
        assert_eq!(
            names(&list(None, PatientFilter::Flagged).await),
            vec!["Arjun Mehta", "Ravi Kumar"]
        );
        assert!(list(Some("sanya"), PatientFilter::Flagged).await.is_empty());
    }

    #[tokio::test]
    async fn patients_cannot_list() {
        let patient = AuthenticatedUser::new(
            UserId::new("p1").unwrap(),
            "Arjun Mehta",
            "arjun@example.com",
            Role::Patient,
        );

        let result = handler()
            .handle(ListPatientsQuery {
                user: patient,
                search: None,
                filter: PatientFilter::All,
            })
            .await;

        assert_eq!(result, Err(PatientError::Forbidden));
    }

    #[test]
    fn filter_deserializes_lowercase() {
        let filter: PatientFilter = serde_json::from_str("\"flagged\"").unwrap();
        assert_eq!(filter, PatientFilter::Flagged);
        assert_eq!(PatientFilter::default(), PatientFilter::All);
    }
}
