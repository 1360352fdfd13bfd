//! Macro for the closed label catalogs that make up a life context.
//!
//! **`label_catalog!`** generates, for each questionnaire field:
//! - a `Copy` enum whose serde form is the exact human-readable label
//! - `ALL` in questionnaire order, `FIELD` with the life-context field name
//! - `label()`, `emoji()`, `Display` and `FromStr` (label lookup)
//!
//! # Usage
//!
//! ```ignore
//! label_catalog! {
//!     /// How long the patient sleeps.
//!     SleepHours, "sleep_hours" {
//!         UnderFour => ("😴", "Less than 4 hours"),
//!         Healthy => ("✅", "6–8 hours (healthy)"),
//!     }
//! }
//! ```

macro_rules! label_catalog {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $variant:ident => ($emoji:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in questionnaire order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Life-context field this catalog fills.
            pub const FIELD: &'static str = $field;

            /// Human-readable label; also the serialized form.
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// Pictogram shown next to the option in the questionnaire.
            pub fn emoji(&self) -> &'static str {
                match self {
                    $( $name::$variant => $emoji, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::foundation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.label() == s)
                    .ok_or_else(|| {
                        $crate::domain::foundation::ValidationError::invalid_format(
                            $field,
                            format!("'{}' is not one of the offered options", s),
                        )
                    })
            }
        }
    };
}

pub(crate) use label_catalog;
