//! Demo patients loaded at startup.

use chrono::NaiveDate;

use crate::domain::foundation::{PatientId, ValidationError};

use super::aggregate::{Patient, PatientProfile};
use super::life_context::{
    CommuteTime, FoodAccess, LifeContext, LivingSituation, SleepHours, StressLevel, WorkSchedule,
};

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ValidationError::invalid_format("created_at", format!("{}-{}-{}", year, month, day))
    })
}

fn profile(
    name: &str,
    email: &str,
    condition: &str,
    age: u32,
    medications: &str,
    standard_care: &str,
) -> PatientProfile {
    PatientProfile {
        name: name.to_string(),
        email: email.to_string(),
        condition: condition.to_string(),
        age: Some(age),
        medications: medications.to_string(),
        standard_care: standard_care.to_string(),
    }
}

/// The three seeded patients, pending review, flags computed.
pub fn seed_patients() -> Result<Vec<Patient>, ValidationError> {
    Ok(vec![
        Patient::new(
            PatientId::new("p1")?,
            profile(
                "Arjun Mehta",
                "arjun@example.com",
                "Type 2 Diabetes",
                34,
                "Metformin 500mg twice daily",
                "Regular exercise, balanced diet, monitor blood sugar",
            ),
            LifeContext::new(
                WorkSchedule::NightShift,
                CommuteTime::OneToTwoHours,
                FoodAccess::Canteen,
                SleepHours::FourToSix,
                StressLevel::Highly,
                LivingSituation::Alone,
            ),
            date(2026, 2, 18)?,
        ),
        Patient::new(
            PatientId::new("p2")?,
            profile(
                "Sanya Kapoor",
                "sanya@example.com",
                "Hypertension",
                45,
                "Amlodipine 5mg daily",
                "Low sodium diet, regular BP monitoring, stress management",
            ),
            LifeContext::new(
                WorkSchedule::DayShift,
                CommuteTime::ThirtyMinutesToHour,
                FoodAccess::Easy,
                SleepHours::SixToEight,
                StressLevel::Moderately,
                LivingSituation::WithFamily,
            ),
            date(2026, 2, 19)?,
        ),
        Patient::new(
            PatientId::new("p3")?,
            profile(
                "Ravi Kumar",
                "ravi@example.com",
                "Chronic Back Pain",
                28,
                "Ibuprofen as needed, Muscle relaxant",
                "Physical therapy, posture correction, weight management",
            ),
            LifeContext::new(
                WorkSchedule::RotatingShifts,
                CommuteTime::OverTwoHours,
                FoodAccess::SkipsMeals,
                SleepHours::UnderFour,
                StressLevel::Overwhelmed,
                LivingSituation::WithRoommates,
            ),
            date(2026, 2, 20)?,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::{PatientStatus, Severity};

    #[test]
    fn seeds_three_pending_patients() {
        let patients = seed_patients().unwrap();
        let ids: Vec<&str> = patients.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
        assert!(patients.iter().all(|p| p.status() == PatientStatus::Pending));
        assert!(patients.iter().all(|p| !p.has_care_plan()));
    }

    #[test]
    fn seeded_flags_match_life_contexts() {
        let patients = seed_patients().unwrap();
        assert_eq!(patients[0].flag_count(), 4);
        assert_eq!(patients[1].flag_count(), 0);
        assert_eq!(patients[2].flag_count(), 5);
        assert_eq!(patients[1].severity(), Severity::Low);
        assert_eq!(patients[2].severity(), Severity::High);
    }
}
