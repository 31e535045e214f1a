use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw dating inputs as captured by the form. Every field may be blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PregnancyInputs {
    pub lmp_date: Option<Date>,
    pub ultrasound_date: Option<Date>,
    pub ga_weeks_at_ultrasound: Option<u32>,
    pub ga_days_at_ultrasound: Option<u32>,
}

impl PregnancyInputs {
    pub fn from_lmp(lmp_date: Date) -> Self {
        Self {
            lmp_date: Some(lmp_date),
            ..Self::default()
        }
    }

    pub fn with_ultrasound(mut self, date: Date, weeks: u32, days: u32) -> Self {
        self.ultrasound_date = Some(date);
        self.ga_weeks_at_ultrasound = Some(weeks);
        self.ga_days_at_ultrasound = Some(days);
        self
    }
}

/// Gestational age in completed weeks plus remainder days.
///
/// Negative when the reference date precedes the anchor; `weeks` and `days`
/// then share the sign of `total_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GestationalAge {
    pub weeks: i32,
    pub days: i32,
    pub total_days: i32,
}

impl GestationalAge {
    pub fn from_days(total_days: i32) -> Self {
        Self {
            weeks: total_days / 7,
            days: total_days % 7,
            total_days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub fn number(self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }
}

/// Which date the due date was anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DatingMethod {
    Lmp,
    Ultrasound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PregnancyInfo {
    pub due_date: Date,
    pub gestational_age: GestationalAge,
    pub trimester: Trimester,
    pub method: DatingMethod,
    /// LMP, or the LMP implied by the ultrasound measurement.
    pub anchor_date: Date,
    /// Negative once the due date has passed.
    pub days_until_due: i32,
}
