//! Patient module - intake, conflict flags and adapted care plans.
//!
//! # Components
//!
//! - `life_context` - the six closed answer catalogs and the `LifeContext` value
//! - `flags` - conflict flag rule engine
//! - `severity` - risk tier from flag count
//! - `care_plan` - care-plan template engine
//! - `aggregate` - the `Patient` record
//! - `intake` - questionnaire and submitted answers

mod aggregate;
mod care_plan;
mod errors;
mod fixtures;
mod flags;
mod intake;
mod life_context;
mod macros;
mod severity;
mod status;

pub use aggregate::{Patient, PatientProfile, PatientUpdate};
pub use care_plan::{generate_care_plan, CarePlan, CarePlanSection, CarePlanTemplate};
pub use errors::{PatientError, DOCTOR_EXPORT_NOTICE, PATIENT_EXPORT_NOTICE};
pub use fixtures::seed_patients;
pub use flags::{generate_flags, strip_flag_prefix, ConflictRule, FLAG_PREFIX};
pub use intake::{questionnaire, IntakeAnswers, Question, QuestionOption};
pub use life_context::{
    CommuteTime, FoodAccess, LifeContext, LivingSituation, SleepHours, StressLevel, WorkSchedule,
};
pub use severity::{Severity, HIGH_RISK_FLAG_COUNT};
pub use status::PatientStatus;
