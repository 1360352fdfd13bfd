//! Care-plan template engine.
//!
//! Assembles the six-section adapted care plan from a life context and the
//! prescribed medications. Each advice line is a binary choice: the adapted
//! text when the patient's answer matches, the generic advice otherwise.
//! Predicates test the catalog label text, so an answer matches whenever
//! its label contains the keyword.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::life_context::{LifeContext, LivingSituation};

/// Bullet placed before every advice line.
const BULLET: &str = "• ";

/// Text used when no medications are recorded.
const MEDICATIONS_FALLBACK: &str = "As prescribed";

/// The fixed sections of a care plan, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarePlanSection {
    MorningRoutine,
    MedicationSchedule,
    DietAdjustments,
    Exercise,
    MentalHealth,
    FollowUp,
}

impl CarePlanSection {
    pub const ALL: [CarePlanSection; 6] = [
        CarePlanSection::MorningRoutine,
        CarePlanSection::MedicationSchedule,
        CarePlanSection::DietAdjustments,
        CarePlanSection::Exercise,
        CarePlanSection::MentalHealth,
        CarePlanSection::FollowUp,
    ];

    /// Heading line, emoji included.
    pub fn heading(&self) -> &'static str {
        match self {
            CarePlanSection::MorningRoutine => "🕐 MORNING ROUTINE",
            CarePlanSection::MedicationSchedule => "💊 MEDICATION SCHEDULE",
            CarePlanSection::DietAdjustments => "🥗 DIET ADJUSTMENTS",
            CarePlanSection::Exercise => "🏃 EXERCISE",
            CarePlanSection::MentalHealth => "🧠 MENTAL HEALTH",
            CarePlanSection::FollowUp => "📅 FOLLOW-UP",
        }
    }
}

/// A generated plan, kept structured until rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarePlan {
    sections: Vec<(CarePlanSection, Vec<String>)>,
}

impl CarePlan {
    pub fn sections(&self) -> &[(CarePlanSection, Vec<String>)] {
        &self.sections
    }

    /// Advice lines of one section, without bullets.
    pub fn section(&self, section: CarePlanSection) -> &[String] {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, lines)| lines.as_slice())
            .unwrap_or(&[])
    }

    /// Plain-text rendering stored as the patient's adapted care plan.
    pub fn to_text(&self) -> String {
        self.sections
            .iter()
            .map(|(section, lines)| {
                let mut block = String::from(section.heading());
                for line in lines {
                    block.push('\n');
                    block.push_str(BULLET);
                    block.push_str(line);
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl fmt::Display for CarePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Picks the adapted advice when `condition` holds, the fallback otherwise.
fn advice(condition: bool, adapted: &str, fallback: &str) -> String {
    let text = if condition { adapted } else { fallback };
    text.to_string()
}

fn mentions(label: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| label.contains(k))
}

/// Stateless builder for adapted care plans.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarePlanTemplate;

impl CarePlanTemplate {
    pub fn new() -> Self {
        Self
    }

    /// Builds the plan for a life context and medication list.
    pub fn build(&self, context: &LifeContext, medications: &str) -> CarePlan {
        let work = context.work_schedule().label();
        let food = context.food_access().label();
        let commute = context.commute_time().label();
        let stress = context.stress_level().label();
        let works_nights = mentions(work, &["Night"]);

        let medications = if medications.is_empty() {
            MEDICATIONS_FALLBACK
        } else {
            medications
        };

        let morning = vec![
            format!(
                "Since you work {}, adjust your wake-up routine accordingly",
                work.to_lowercase()
            ),
            format!(
                "Take medications {}",
                if works_nights {
                    "before your shift starts at 9:30 PM"
                } else {
                    "with breakfast at 8:00 AM"
                }
            ),
            "5-minute stretching routine before leaving".to_string(),
        ];

        let medication = vec![
            format!(
                "{} — {}",
                medications,
                if works_nights {
                    "shifted to evening timing to match your schedule"
                } else {
                    "morning and evening with meals"
                }
            ),
            "Set phone alarms as reminders".to_string(),
            "Keep a weekly pill organizer".to_string(),
        ];

        let diet = vec![
            advice(
                mentions(food, &["Difficult", "tiffin"]),
                "Since healthy food access is limited, focus on: requesting healthier options from your canteen, keeping fruits and nuts as snacks, drinking adequate water",
                "Maintain balanced meals with vegetables, lean protein, and whole grains",
            ),
            advice(
                mentions(food, &["skip meals"]),
                "CRITICAL: Meal skipping worsens your condition. Prep simple meals on days off",
                "Eat at regular intervals, avoid processed food",
            ),
        ];

        let exercise = vec![
            advice(
                mentions(commute, &["2 hours", "1–2"]),
                "Long commute limits exercise time — walk during breaks, use stairs, do desk stretches",
                "30 minutes of moderate activity daily — walking, cycling, or yoga",
            ),
            advice(
                mentions(stress, &["stressed", "Overwhelmed"]),
                "Gentle yoga or breathing exercises can help manage stress",
                "Maintain current activity level",
            ),
        ];

        let mental_health = vec![
            advice(
                mentions(stress, &["Highly", "Overwhelmed"]),
                "PRIORITY: Consider speaking with a counselor. Your stress level significantly impacts recovery.",
                "Continue stress management practices",
            ),
            advice(
                context.living_situation() == LivingSituation::Alone,
                "Living alone can be isolating — join a support group or maintain social connections",
                "Lean on your support system for encouragement",
            ),
            "Practice 5-minute breathing exercises daily".to_string(),
        ];

        let follow_up = vec![
            "Schedule check-in in 2 weeks".to_string(),
            "Track symptoms in a daily journal".to_string(),
            "Contact your doctor if symptoms worsen".to_string(),
        ];

        CarePlan {
            sections: vec![
                (CarePlanSection::MorningRoutine, morning),
                (CarePlanSection::MedicationSchedule, medication),
                (CarePlanSection::DietAdjustments, diet),
                (CarePlanSection::Exercise, exercise),
                (CarePlanSection::MentalHealth, mental_health),
                (CarePlanSection::FollowUp, follow_up),
            ],
        }
    }
}

/// Renders the adapted care plan text for a life context.
pub fn generate_care_plan(context: &LifeContext, medications: &str) -> String {
    CarePlanTemplate::new().build(context, medications).to_text()
}
