//! Patient aggregate.
//!
//! A patient record carries identity, doctor-editable clinical fields, the
//! patient's life context and everything derived from it.
//!
//! # Invariants
//!
//! - `id` and `created_at` never change after construction
//! - `conflict_flags` always equals the rule engine's output for the current
//!   life context; it has no setter of its own
//! - `status` only moves forward (pending to reviewed)

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{PatientId, StateMachine, ValidationError};

use super::flags::generate_flags;
use super::life_context::LifeContext;
use super::severity::Severity;
use super::status::PatientStatus;

/// Identity and clinical fields supplied when a record is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientProfile {
    pub name: String,
    pub email: String,
    pub condition: String,
    pub age: Option<u32>,
    pub medications: String,
    pub standard_care: String,
}

impl PatientProfile {
    /// Profile for a patient known only by their sign-in identity.
    pub fn identity_only(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Partial update of the fields a doctor may edit.
///
/// `None` leaves the field untouched. Life context, flags and status are
/// deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub condition: Option<String>,
    pub age: Option<u32>,
    pub medications: Option<String>,
    pub standard_care: Option<String>,
    pub adapted_care_plan: Option<String>,
}

impl PatientUpdate {
    pub fn is_empty(&self) -> bool {
        self == &PatientUpdate::default()
    }
}

/// Patient aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    email: String,
    condition: String,
    age: Option<u32>,
    medications: String,
    standard_care: String,
    life_context: LifeContext,
    conflict_flags: Vec<String>,
    adapted_care_plan: String,
    status: PatientStatus,
    created_at: NaiveDate,
}

impl Patient {
    /// Creates a pending record with flags computed from `life_context`.
    pub fn new(
        id: PatientId,
        profile: PatientProfile,
        life_context: LifeContext,
        created_at: NaiveDate,
    ) -> Self {
        let conflict_flags = generate_flags(&life_context, &profile.condition);
        Self {
            id,
            name: profile.name,
            email: profile.email,
            condition: profile.condition,
            age: profile.age,
            medications: profile.medications,
            standard_care: profile.standard_care,
            life_context,
            conflict_flags,
            adapted_care_plan: String::new(),
            status: PatientStatus::Pending,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &PatientId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn medications(&self) -> &str {
        &self.medications
    }

    pub fn standard_care(&self) -> &str {
        &self.standard_care
    }

    pub fn life_context(&self) -> &LifeContext {
        &self.life_context
    }

    pub fn conflict_flags(&self) -> &[String] {
        &self.conflict_flags
    }

    pub fn adapted_care_plan(&self) -> &str {
        &self.adapted_care_plan
    }

    pub fn status(&self) -> PatientStatus {
        self.status
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived
    // ─────────────────────────────────────────────────────────────────────────

    pub fn severity(&self) -> Severity {
        Severity::of(&self.conflict_flags)
    }

    pub fn flag_count(&self) -> usize {
        self.conflict_flags.len()
    }

    /// True once a non-blank plan has been generated or saved.
    pub fn has_care_plan(&self) -> bool {
        !self.adapted_care_plan.trim().is_empty()
    }

    /// Case-insensitive match on name or condition. A blank query matches all.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.condition.to_lowercase().contains(&query)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the life context and rebuilds the conflict flags from it.
    pub fn replace_life_context(&mut self, life_context: LifeContext) {
        self.conflict_flags = generate_flags(&life_context, &self.condition);
        self.life_context = life_context;
    }

    /// Merges the given fields; everything else keeps its prior value.
    pub fn apply_update(&mut self, update: PatientUpdate) {
        let PatientUpdate {
            name,
            email,
            condition,
            age,
            medications,
            standard_care,
            adapted_care_plan,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(condition) = condition {
            self.condition = condition;
        }
        if let Some(age) = age {
            self.age = Some(age);
        }
        if let Some(medications) = medications {
            self.medications = medications;
        }
        if let Some(standard_care) = standard_care {
            self.standard_care = standard_care;
        }
        if let Some(plan) = adapted_care_plan {
            self.adapted_care_plan = plan;
        }
    }

    /// Moves a pending record to reviewed. Already-reviewed records are left as is.
    pub fn mark_reviewed(&mut self) -> Result<(), ValidationError> {
        if self.status == PatientStatus::Reviewed {
            return Ok(());
        }
        self.status = self.status.transition_to(PatientStatus::Reviewed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::life_context::{
        CommuteTime, FoodAccess, LivingSituation, SleepHours, StressLevel, WorkSchedule,
    };

    fn night_context() -> LifeContext {
        LifeContext::new(
            WorkSchedule::NightShift,
            CommuteTime::OneToTwoHours,
            FoodAccess::Canteen,
            SleepHours::FourToSix,
            StressLevel::Highly,
            LivingSituation::Alone,
        )
    }

    fn calm_context() -> LifeContext {
        LifeContext::new(
            WorkSchedule::WorkFromHome,
            CommuteTime::NoCommute,
            FoodAccess::Easy,
            SleepHours::SixToEight,
            StressLevel::Mildly,
            LivingSituation::WithFamily,
        )
    }

    fn test_patient() -> Patient {
        Patient::new(
            PatientId::new("p1").unwrap(),
            PatientProfile {
                name: "Arjun Mehta".to_string(),
                email: "arjun@example.com".to_string(),
                condition: "Type 2 Diabetes".to_string(),
                age: Some(34),
                medications: "Metformin 500mg twice daily".to_string(),
                standard_care: "Regular exercise".to_string(),
            },
            night_context(),
            NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(),
        )
    }

    #[test]
    fn new_patient_is_pending_with_computed_flags() {
        let patient = test_patient();
        assert_eq!(patient.status(), PatientStatus::Pending);
        assert_eq!(patient.flag_count(), 4);
        assert_eq!(patient.severity(), Severity::High);
        assert!(!patient.has_care_plan());
    }

    #[test]
    fn replacing_life_context_recomputes_flags() {
        let mut patient = test_patient();
        patient.replace_life_context(calm_context());

        assert!(patient.conflict_flags().is_empty());
        assert_eq!(patient.severity(), Severity::Low);
        assert_eq!(patient.life_context(), &calm_context());
    }

    #[test]
    fn apply_update_merges_only_given_fields() {
        let mut patient = test_patient();
        let before = patient.clone();

        patient.apply_update(PatientUpdate {
            medications: Some("Metformin 1000mg".to_string()),
            ..Default::default()
        });

        assert_eq!(patient.medications(), "Metformin 1000mg");
        assert_eq!(patient.name(), before.name());
        assert_eq!(patient.condition(), before.condition());
        assert_eq!(patient.standard_care(), before.standard_care());
        assert_eq!(patient.conflict_flags(), before.conflict_flags());
        assert_eq!(patient.status(), before.status());
        assert_eq!(patient.created_at(), before.created_at());
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut patient = test_patient();
        let before = patient.clone();
        let update = PatientUpdate::default();
        assert!(update.is_empty());

        patient.apply_update(update);
        assert_eq!(patient, before);
    }

    #[test]
    fn whitespace_plan_is_not_a_care_plan() {
        let mut patient = test_patient();
        patient.apply_update(PatientUpdate {
            adapted_care_plan: Some("   \n".to_string()),
            ..Default::default()
        });
        assert!(!patient.has_care_plan());
    }

    #[test]
    fn mark_reviewed_is_one_way_and_repeatable() {
        let mut patient = test_patient();
        patient.mark_reviewed().unwrap();
        assert_eq!(patient.status(), PatientStatus::Reviewed);

        patient.mark_reviewed().unwrap();
        assert_eq!(patient.status(), PatientStatus::Reviewed);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_condition() {
        let patient = test_patient();
        assert!(patient.matches_search("arjun"));
        assert!(patient.matches_search("DIABETES"));
        assert!(patient.matches_search("  "));
        assert!(!patient.matches_search("hypertension"));
    }

    #[test]
    fn serializes_derived_fields_in_snake_case() {
        let json = serde_json::to_value(test_patient()).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["created_at"], "2026-02-18");
        assert_eq!(json["conflict_flags"].as_array().unwrap().len(), 4);
        assert_eq!(json["life_context"]["sleep_hours"], "4–6 hours");
    }
}
