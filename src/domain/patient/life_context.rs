//! Life context - the patient's real-world constraints.
//!
//! Six answers, each drawn from a fixed catalog of labels. A life context is
//! a value object: it is replaced wholesale, never patched field by field.

use serde::{Deserialize, Serialize};

use super::macros::label_catalog;

label_catalog! {
    /// When the patient usually works.
    WorkSchedule, "work_schedule" {
        MorningShift => ("🌅", "Morning Shift (6am–2pm)"),
        DayShift => ("☀️", "Day Shift (9am–5pm)"),
        NightShift => ("🌙", "Night Shift (10pm–6am)"),
        RotatingShifts => ("🔄", "Rotating Shifts"),
        WorkFromHome => ("🏠", "Work From Home"),
        NotWorking => ("❌", "Not Working Currently"),
    }
}

label_catalog! {
    /// Length of the daily commute.
    CommuteTime, "commute_time" {
        NoCommute => ("🚶", "No commute / Work from home"),
        UnderThirtyMinutes => ("🕐", "Less than 30 minutes"),
        ThirtyMinutesToHour => ("🕑", "30 min – 1 hour"),
        OneToTwoHours => ("🕒", "1–2 hours"),
        OverTwoHours => ("🕓", "More than 2 hours"),
    }
}

label_catalog! {
    /// Access to healthy food.
    FoodAccess, "food_access" {
        Easy => ("✅", "Easy — markets/grocery stores nearby"),
        Moderate => ("🏃", "Moderate — need to travel a bit"),
        Difficult => ("❌", "Difficult — very limited options nearby"),
        Canteen => ("🍱", "I rely on tiffin/mess/canteen food"),
        SkipsMeals => ("⏰", "I often skip meals due to time"),
    }
}

label_catalog! {
    /// Average sleep per night.
    SleepHours, "sleep_hours" {
        UnderFour => ("😴", "Less than 4 hours"),
        FourToSix => ("🌙", "4–6 hours"),
        SixToEight => ("✅", "6–8 hours (healthy)"),
        OverNine => ("😪", "More than 9 hours"),
    }
}

label_catalog! {
    /// How stressed the patient feels on most days.
    StressLevel, "stress_level" {
        Rarely => ("😊", "Rarely stressed"),
        Mildly => ("😐", "Mildly stressed"),
        Moderately => ("😟", "Moderately stressed"),
        Highly => ("😰", "Highly stressed"),
        Overwhelmed => ("🤯", "Overwhelmed most of the time"),
    }
}

label_catalog! {
    /// Who the patient lives with.
    LivingSituation, "living_situation" {
        Alone => ("👤", "Alone"),
        WithFamily => ("👨‍👩‍👧", "With family"),
        WithRoommates => ("🏠", "With roommates"),
        AssistedCare => ("🏥", "Assisted care / hostel"),
    }
}

/// The six answers of the intake questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LifeContext {
    work_schedule: WorkSchedule,
    commute_time: CommuteTime,
    food_access: FoodAccess,
    sleep_hours: SleepHours,
    stress_level: StressLevel,
    living_situation: LivingSituation,
}

impl LifeContext {
    pub fn new(
        work_schedule: WorkSchedule,
        commute_time: CommuteTime,
        food_access: FoodAccess,
        sleep_hours: SleepHours,
        stress_level: StressLevel,
        living_situation: LivingSituation,
    ) -> Self {
        Self {
            work_schedule,
            commute_time,
            food_access,
            sleep_hours,
            stress_level,
            living_situation,
        }
    }

    pub fn work_schedule(&self) -> WorkSchedule {
        self.work_schedule
    }

    pub fn commute_time(&self) -> CommuteTime {
        self.commute_time
    }

    pub fn food_access(&self) -> FoodAccess {
        self.food_access
    }

    pub fn sleep_hours(&self) -> SleepHours {
        self.sleep_hours
    }

    pub fn stress_level(&self) -> StressLevel {
        self.stress_level
    }

    pub fn living_situation(&self) -> LivingSituation {
        self.living_situation
    }

    /// `(heading, answer)` pairs in questionnaire order, for display and export.
    pub fn entries(&self) -> [(&'static str, &'static str); 6] {
        [
            ("Work Schedule", self.work_schedule.label()),
            ("Daily Commute", self.commute_time.label()),
            ("Food Access", self.food_access.label()),
            ("Sleep", self.sleep_hours.label()),
            ("Stress Level", self.stress_level.label()),
            ("Living Situation", self.living_situation.label()),
        ]
    }
}
