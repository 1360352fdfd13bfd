//! Identifiers.
//!
//! Ids are short opaque strings (`p1`, `d1`) rather than UUIDs, so seeded
//! fixtures and mock identities stay human-readable. A signed-in patient's
//! record shares the user's id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Blank or whitespace-only ids are rejected.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                match id.trim() {
                    "" => Err(ValidationError::empty_field($field)),
                    _ => Ok(Self(id)),
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Self::new(raw)
            }
        }
    };
}

string_id!(
    /// A patient record.
    PatientId,
    "patient_id"
);

string_id!(
    /// A signed-in user, patient or doctor.
    UserId,
    "user_id"
);

impl PatientId {
    pub fn for_user(user_id: &UserId) -> Self {
        Self(user_id.0.clone())
    }
}
