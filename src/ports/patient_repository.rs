//! Patient repository port.
//!
//! Defines the contract for storing and retrieving Patient aggregates.
//! Records are never deleted; they live until the process ends.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PatientId};
use crate::domain::patient::Patient;

/// Repository port for Patient aggregate persistence.
///
/// Implementations must keep records in insertion order so dashboards list
/// patients the way they were admitted.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Save a new patient.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a patient with the same id already exists
    /// - `StorageError` on persistence failure
    async fn save(&self, patient: &Patient) -> Result<(), DomainError>;

    /// Replace an existing patient.
    ///
    /// # Errors
    ///
    /// - `PatientNotFound` if the patient doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, patient: &Patient) -> Result<(), DomainError>;

    /// Find a patient by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PatientId) -> Result<Option<Patient>, DomainError>;

    /// All patients in insertion order.
    async fn list(&self) -> Result<Vec<Patient>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PatientRepository) {}
    }
}
