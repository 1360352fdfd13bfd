//! Intake questionnaire.
//!
//! The six questions a patient answers, one per life-context field, and the
//! answer set collected from them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::life_context::{
    CommuteTime, FoodAccess, LifeContext, LivingSituation, SleepHours, StressLevel, WorkSchedule,
};

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub emoji: &'static str,
    pub label: &'static str,
}

/// One question of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Life-context field the answer fills.
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub options: Vec<QuestionOption>,
}

macro_rules! question {
    ($catalog:ty, $title:literal, $subtitle:literal) => {
        Question {
            key: <$catalog>::FIELD,
            title: $title,
            subtitle: $subtitle,
            options: <$catalog>::ALL
                .iter()
                .map(|option| QuestionOption {
                    emoji: option.emoji(),
                    label: option.label(),
                })
                .collect(),
        }
    };
}

/// The questionnaire in presentation order.
pub fn questionnaire() -> Vec<Question> {
    vec![
        question!(WorkSchedule, "When do you usually work?", "Work Schedule"),
        question!(CommuteTime, "How long is your daily commute?", "Daily Commute"),
        question!(
            FoodAccess,
            "How would you describe your access to healthy food?",
            "Food Access"
        ),
        question!(SleepHours, "How many hours do you sleep on average?", "Sleep"),
        question!(StressLevel, "How stressed do you feel on most days?", "Stress Level"),
        question!(LivingSituation, "Who do you live with?", "Living Situation"),
    ]
}

/// Answers as submitted; any of them may still be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct IntakeAnswers {
    #[serde(default)]
    pub work_schedule: Option<WorkSchedule>,
    #[serde(default)]
    pub commute_time: Option<CommuteTime>,
    #[serde(default)]
    pub food_access: Option<FoodAccess>,
    #[serde(default)]
    pub sleep_hours: Option<SleepHours>,
    #[serde(default)]
    pub stress_level: Option<StressLevel>,
    #[serde(default)]
    pub living_situation: Option<LivingSituation>,
}

impl IntakeAnswers {
    pub fn answered_count(&self) -> usize {
        [
            self.work_schedule.is_some(),
            self.commute_time.is_some(),
            self.food_access.is_some(),
            self.sleep_hours.is_some(),
            self.stress_level.is_some(),
            self.living_situation.is_some(),
        ]
        .iter()
        .filter(|answered| **answered)
        .count()
    }

    /// Field name of the first unanswered question, in questionnaire order.
    pub fn first_missing(&self) -> Option<&'static str> {
        if self.work_schedule.is_none() {
            Some(WorkSchedule::FIELD)
        } else if self.commute_time.is_none() {
            Some(CommuteTime::FIELD)
        } else if self.food_access.is_none() {
            Some(FoodAccess::FIELD)
        } else if self.sleep_hours.is_none() {
            Some(SleepHours::FIELD)
        } else if self.stress_level.is_none() {
            Some(StressLevel::FIELD)
        } else if self.living_situation.is_none() {
            Some(LivingSituation::FIELD)
        } else {
            None
        }
    }

    /// Completes the answers into a life context.
    ///
    /// # Errors
    ///
    /// `EmptyField` naming the first unanswered question.
    pub fn into_life_context(self) -> Result<LifeContext, ValidationError> {
        fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
            value.ok_or_else(|| ValidationError::empty_field(field))
        }

        Ok(LifeContext::new(
            required(self.work_schedule, WorkSchedule::FIELD)?,
            required(self.commute_time, CommuteTime::FIELD)?,
            required(self.food_access, FoodAccess::FIELD)?,
            required(self.sleep_hours, SleepHours::FIELD)?,
            required(self.stress_level, StressLevel::FIELD)?,
            required(self.living_situation, LivingSituation::FIELD)?,
        ))
    }
}

impl From<LifeContext> for IntakeAnswers {
    fn from(context: LifeContext) -> Self {
        Self {
            work_schedule: Some(context.work_schedule()),
            commute_time: Some(context.commute_time()),
            food_access: Some(context.food_access()),
            sleep_hours: Some(context.sleep_hours()),
            stress_level: Some(context.stress_level()),
            living_situation: Some(context.living_situation()),
        }
    }
}
