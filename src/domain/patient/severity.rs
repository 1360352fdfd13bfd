//! Severity tier derived from the number of conflict flags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flag count at which a patient becomes high risk.
pub const HIGH_RISK_FLAG_COUNT: usize = 3;

/// Risk tier shown on the doctor dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Moderate,
    Low,
}

impl Severity {
    /// 3+ flags is high, 1-2 moderate, none low.
    pub fn from_flag_count(count: usize) -> Self {
        if count >= HIGH_RISK_FLAG_COUNT {
            Severity::High
        } else if count >= 1 {
            Severity::Moderate
        } else {
            Severity::Low
        }
    }

    pub fn of<S: AsRef<str>>(flags: &[S]) -> Self {
        Self::from_flag_count(flags.len())
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High Risk",
            Severity::Moderate => "Moderate",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::High => "high",
            Severity::Moderate => "moderate",
            Severity::Low => "low",
        };
        f.write_str(s)
    }
}
