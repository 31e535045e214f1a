use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WeightUnit {
    #[default]
    Grams,
    Kilograms,
    Pounds,
}

impl WeightUnit {
    pub const GRAMS_PER_POUND: f64 = 453.592;

    pub fn grams_factor(self) -> f64 {
        match self {
            WeightUnit::Grams => 1.0,
            WeightUnit::Kilograms => 1000.0,
            WeightUnit::Pounds => Self::GRAMS_PER_POUND,
        }
    }

    pub fn to_grams(self, value: f64) -> f64 {
        value * self.grams_factor()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Grams => "g",
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lb",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(WeightUnit::Grams),
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pounds),
            _ => Err(CoreError::Parse {
                field: "unit".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightLossInputs {
    pub birth_weight: f64,
    pub current_weight: f64,
    pub unit: WeightUnit,
    pub age_hours: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WeightLossSeverity {
    Normal,
    Concern,
    Danger,
}

/// Which threshold table an interpretation was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeWindow {
    /// 0–24 hours of life.
    FirstDay,
    /// 24–48 hours.
    SecondDay,
    /// 48–72 hours.
    ThirdDay,
    /// Older than 72 hours, or age not given.
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightLossInterpretation {
    pub message: String,
    pub severity: WeightLossSeverity,
}

/// Change is signed: a weight gain gives negative `weight_change_grams`
/// and `percentage_change`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightLossResult {
    pub weight_change_grams: f64,
    pub percentage_change: f64,
    pub interpretation: WeightLossInterpretation,
    pub age_window: AgeWindow,
}
