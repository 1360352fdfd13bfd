//! Doctor dashboard queries - headline statistics and flagged cases.

use serde::Serialize;

use crate::application::PatientStore;
use crate::domain::foundation::{AuthenticatedUser, Role};
use crate::domain::patient::{Patient, PatientError, Severity, HIGH_RISK_FLAG_COUNT};

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatientStats {
    pub total: usize,
    pub pending_review: usize,
    pub flagged: usize,
}

impl PatientStats {
    pub fn of(patients: &[Patient]) -> Self {
        Self {
            total: patients.len(),
            pending_review: patients.iter().filter(|p| p.status().is_pending()).count(),
            flagged: patients
                .iter()
                .filter(|p| p.severity() == Severity::High)
                .count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatientStatsQuery {
    pub user: AuthenticatedUser,
}

pub struct PatientStatsHandler {
    store: PatientStore,
}

impl PatientStatsHandler {
    pub fn new(store: PatientStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: PatientStatsQuery) -> Result<PatientStats, PatientError> {
        query.user.require_role(Role::Doctor)?;
        let patients = self.store.list_patients().await?;
        Ok(PatientStats::of(&patients))
    }
}

#[derive(Debug, Clone)]
pub struct ListFlaggedQuery {
    pub user: AuthenticatedUser,
}

/// Patients with at least `HIGH_RISK_FLAG_COUNT` conflict flags.
pub struct ListFlaggedHandler {
    store: PatientStore,
}

impl ListFlaggedHandler {
    pub fn new(store: PatientStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListFlaggedQuery) -> Result<Vec<Patient>, PatientError> {
        query.user.require_role(Role::Doctor)?;
        Ok(self
            .store
            .list_patients()
            .await?
            .into_iter()
            .filter(|p| p.flag_count() >= HIGH_RISK_FLAG_COUNT)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPatientRepository;
    use crate::domain::foundation::{PatientId, UserId};
    use crate::domain::patient::{seed_patients, PatientUpdate};
    use std::sync::Arc;

    fn store() -> PatientStore {
        PatientStore::new(Arc::new(InMemoryPatientRepository::with_patients(
            seed_patients().unwrap(),
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

    #[tokio::test]
    async fn stats_for_seed_data() {
        let stats = PatientStatsHandler::new(store())
            .handle(PatientStatsQuery { user: doctor() })
            .await
            .unwrap();

        assert_eq!(
            stats,
            PatientStats {
                total: 3,
                pending_review: 3,
                flagged: 2,
            }
        );
    }

    #[tokio::test]
    async fn reviewing_reduces_pending_count() {
        let store = store();
        store
            .review_patient(&PatientId::new("p2").unwrap(), PatientUpdate::default())
            .await
            .unwrap();

        let stats = PatientStatsHandler::new(store)
            .handle(PatientStatsQuery { user: doctor() })
            .await
            .unwrap();

        assert_eq!(stats.pending_review, 2);
    }

    #[tokio::test]
    async fn flagged_cases_have_three_or_more_flags() {
        let flagged = ListFlaggedHandler::new(store())
            .handle(ListFlaggedQuery { user: doctor() })
            .await
            .unwrap();

        let ids: Vec<&str> = flagged.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
    }
}
