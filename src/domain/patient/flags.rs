//! Conflict flag rules.
//!
//! Maps a life context to the warnings a doctor sees next to the standard
//! care advice. Pure and total: the same input always yields the same
//! ordered list, and the list is always rebuilt from scratch.

use serde::{Deserialize, Serialize};

use super::life_context::{
    CommuteTime, FoodAccess, LifeContext, LivingSituation, SleepHours, StressLevel, WorkSchedule,
};

/// Prefix carried by every rendered warning.
pub const FLAG_PREFIX: &str = "⚠️ ";

/// One conflict between standard advice and the patient's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictRule {
    NightShift,
    RotatingShifts,
    HighStress,
    LimitedFoodAccess,
    SevereSleepDeprivation,
    LongCommute,
    LivesAlone,
}

impl ConflictRule {
    /// Rules in evaluation order. Output order follows this array.
    pub const EVALUATION_ORDER: [ConflictRule; 7] = [
        ConflictRule::NightShift,
        ConflictRule::RotatingShifts,
        ConflictRule::HighStress,
        ConflictRule::LimitedFoodAccess,
        ConflictRule::SevereSleepDeprivation,
        ConflictRule::LongCommute,
        ConflictRule::LivesAlone,
    ];

    /// Returns true if the rule fires for this life context.
    pub fn applies_to(&self, context: &LifeContext) -> bool {
        match self {
            ConflictRule::NightShift => context.work_schedule() == WorkSchedule::NightShift,
            ConflictRule::RotatingShifts => {
                context.work_schedule() == WorkSchedule::RotatingShifts
            }
            ConflictRule::HighStress => matches!(
                context.stress_level(),
                StressLevel::Highly | StressLevel::Overwhelmed
            ),
            ConflictRule::LimitedFoodAccess => matches!(
                context.food_access(),
                FoodAccess::Difficult | FoodAccess::SkipsMeals
            ),
            ConflictRule::SevereSleepDeprivation => {
                context.sleep_hours() == SleepHours::UnderFour
            }
            ConflictRule::LongCommute => matches!(
                context.commute_time(),
                CommuteTime::OneToTwoHours | CommuteTime::OverTwoHours
            ),
            ConflictRule::LivesAlone => context.living_situation() == LivingSituation::Alone,
        }
    }

    /// Warning text without the prefix.
    pub fn warning(&self) -> &'static str {
        match self {
            ConflictRule::NightShift => {
                "Patient works night shifts — morning medication schedule may fail"
            }
            ConflictRule::RotatingShifts => {
                "Rotating shifts — consistent medication timing will be challenging"
            }
            ConflictRule::HighStress => "High stress reported — consider mental health referral",
            ConflictRule::LimitedFoodAccess => {
                "Limited food access — standard diet plan may be unrealistic"
            }
            ConflictRule::SevereSleepDeprivation => {
                "Severe sleep deprivation — recovery will be significantly impacted"
            }
            ConflictRule::LongCommute => "Long commute — exercise and meal prep time is limited",
            ConflictRule::LivesAlone => {
                "Lives alone — may need additional support for medication compliance"
            }
        }
    }

    /// Warning as stored on the patient record.
    pub fn flag(&self) -> String {
        format!("{}{}", FLAG_PREFIX, self.warning())
    }

    /// Every rule that fires, in evaluation order.
    pub fn matching(context: &LifeContext) -> Vec<ConflictRule> {
        Self::EVALUATION_ORDER
            .iter()
            .copied()
            .filter(|rule| rule.applies_to(context))
            .collect()
    }
}

/// Builds the ordered conflict flags for a life context.
///
/// `condition` is accepted so rules can later depend on the diagnosis; no
/// current rule reads it.
pub fn generate_flags(context: &LifeContext, _condition: &str) -> Vec<String> {
    ConflictRule::matching(context)
        .into_iter()
        .map(|rule| rule.flag())
        .collect()
}

/// Strips the warning prefix for display beside an icon.
pub fn strip_flag_prefix(flag: &str) -> &str {
    flag.strip_prefix(FLAG_PREFIX).unwrap_or(flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn context(
        work: WorkSchedule,
        commute: CommuteTime,
        food: FoodAccess,
        sleep: SleepHours,
        stress: StressLevel,
        living: LivingSituation,
    ) -> LifeContext {
        LifeContext::new(work, commute, food, sleep, stress, living)
    }

    fn overloaded_rotating_worker() -> LifeContext {
        context(
            WorkSchedule::RotatingShifts,
            CommuteTime::OverTwoHours,
            FoodAccess::SkipsMeals,
            SleepHours::UnderFour,
            StressLevel::Overwhelmed,
            LivingSituation::WithRoommates,
        )
    }

    fn balanced_day_worker() -> LifeContext {
        context(
            WorkSchedule::DayShift,
            CommuteTime::ThirtyMinutesToHour,
            FoodAccess::Easy,
            SleepHours::SixToEight,
            StressLevel::Moderately,
            LivingSituation::WithFamily,
        )
    }

    #[test]
    fn rotating_worker_gets_five_flags_in_order() {
        let flags = generate_flags(&overloaded_rotating_worker(), "Chronic Back Pain");

        assert_eq!(flags.len(), 5);
        assert_eq!(
            flags,
            vec![
                "⚠️ Rotating shifts — consistent medication timing will be challenging",
                "⚠️ High stress reported — consider mental health referral",
                "⚠️ Limited food access — standard diet plan may be unrealistic",
                "⚠️ Severe sleep deprivation — recovery will be significantly impacted",
                "⚠️ Long commute — exercise and meal prep time is limited",
            ]
        );
    }

    #[test]
    fn balanced_day_worker_gets_no_flags() {
        assert!(generate_flags(&balanced_day_worker(), "Hypertension").is_empty());
    }

    #[test]
    fn night_shift_alone_flags_first_and_last() {
        let ctx = context(
            WorkSchedule::NightShift,
            CommuteTime::OneToTwoHours,
            FoodAccess::Canteen,
            SleepHours::FourToSix,
            StressLevel::Highly,
            LivingSituation::Alone,
        );
        let flags = generate_flags(&ctx, "Type 2 Diabetes");

        assert_eq!(flags.len(), 4);
        assert_eq!(
            flags[0],
            "⚠️ Patient works night shifts — morning medication schedule may fail"
        );
        assert_eq!(
            flags[3],
            "⚠️ Lives alone — may need additional support for medication compliance"
        );
    }

    #[test]
    fn canteen_food_is_not_a_food_access_flag() {
        let base = balanced_day_worker();
        let ctx = LifeContext::new(
            base.work_schedule(),
            base.commute_time(),
            FoodAccess::Canteen,
            base.sleep_hours(),
            base.stress_level(),
            base.living_situation(),
        );
        assert!(!ConflictRule::LimitedFoodAccess.applies_to(&ctx));
    }

    #[test]
    fn condition_does_not_change_output() {
        let ctx = overloaded_rotating_worker();
        assert_eq!(generate_flags(&ctx, ""), generate_flags(&ctx, "Asthma"));
    }

    #[test]
    fn strip_flag_prefix_removes_warning_sign() {
        assert_eq!(
            strip_flag_prefix(&ConflictRule::LivesAlone.flag()),
            ConflictRule::LivesAlone.warning()
        );
        assert_eq!(strip_flag_prefix("plain"), "plain");
    }

    fn any_life_context() -> impl Strategy<Value = LifeContext> {
        (
            prop::sample::select(WorkSchedule::ALL),
            prop::sample::select(CommuteTime::ALL),
            prop::sample::select(FoodAccess::ALL),
            prop::sample::select(SleepHours::ALL),
            prop::sample::select(StressLevel::ALL),
            prop::sample::select(LivingSituation::ALL),
        )
            .prop_map(|(w, c, f, s, st, l)| LifeContext::new(w, c, f, s, st, l))
    }

    proptest! {
        #[test]
        fn generation_is_idempotent(ctx in any_life_context()) {
            prop_assert_eq!(generate_flags(&ctx, "x"), generate_flags(&ctx, "x"));
        }

        #[test]
        fn night_shift_always_leads(ctx in any_life_context()) {
            let flags = generate_flags(&ctx, "");
            if ctx.work_schedule() == WorkSchedule::NightShift {
                prop_assert_eq!(flags[0].clone(), ConflictRule::NightShift.flag());
            }
        }

        #[test]
        fn flags_follow_evaluation_order(ctx in any_life_context()) {
            let rules = ConflictRule::matching(&ctx);
            let positions: Vec<usize> = rules
                .iter()
                .map(|r| ConflictRule::EVALUATION_ORDER.iter().position(|o| o == r).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(rules.len() <= 7);
        }
    }
}
