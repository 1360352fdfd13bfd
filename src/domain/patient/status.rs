//! PatientStatus enum for tracking doctor review of a patient record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Review status of a patient record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    #[default]
    Pending,
    Reviewed,
}

impl PatientStatus {
    /// Returns true while the record still awaits a saved care plan.
    pub fn is_pending(&self) -> bool {
        matches!(self, PatientStatus::Pending)
    }

    /// Badge text on the dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            PatientStatus::Pending => "Pending Review",
            PatientStatus::Reviewed => "Reviewed",
        }
    }
}

impl StateMachine for PatientStatus {
    fn successors(&self) -> &'static [Self] {
        match self {
            PatientStatus::Pending => &[PatientStatus::Reviewed],
            PatientStatus::Reviewed => &[],
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatientStatus::Pending => "pending",
            PatientStatus::Reviewed => "reviewed",
        };
        write!(f, "{}", s)
    }
}
