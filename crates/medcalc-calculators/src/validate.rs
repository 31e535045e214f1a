//! Checks a form runs before invoking a calculator. Each issue carries the
//! message shown next to the offending field.

use jiff::civil::Date;
use medcalc_core::models::{HeightWeightInputs, PregnancyInputs, WeightLossInputs};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::body_weight::FIVE_FEET_CM;
use crate::error::CalculatorError;

/// Upper limit accepted for gestational age at ultrasound.
pub const MAX_GA_WEEKS: u32 = 45;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Turn a list of issues into a result.
pub fn ensure(issues: Vec<ValidationIssue>) -> Result<(), CalculatorError> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(CalculatorError::Validation(issues))
    }
}

pub fn validate_pregnancy(inputs: &PregnancyInputs, today: Date) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match inputs.lmp_date {
        None => issues.push(ValidationIssue::new(
            "lmp_date",
            "Enter the first day of the last menstrual period.",
        )),
        Some(lmp) if lmp > today => issues.push(ValidationIssue::new(
            "lmp_date",
            "Last menstrual period cannot be in the future.",
        )),
        Some(_) => {}
    }

    if let (Some(lmp), Some(scan)) = (inputs.lmp_date, inputs.ultrasound_date)
        && scan < lmp
    {
        issues.push(ValidationIssue::new(
            "ultrasound_date",
            "Ultrasound date cannot be before the last menstrual period.",
        ));
    }

    if let Some(scan) = inputs.ultrasound_date
        && scan > today
    {
        issues.push(ValidationIssue::new(
            "ultrasound_date",
            "Ultrasound date cannot be in the future.",
        ));
    }

    match (
        inputs.ultrasound_date,
        inputs.ga_weeks_at_ultrasound,
        inputs.ga_days_at_ultrasound,
    ) {
        (Some(_), None, _) => issues.push(ValidationIssue::new(
            "ga_weeks_at_ultrasound",
            "Enter the gestational age measured at the ultrasound.",
        )),
        (None, Some(_), _) => issues.push(ValidationIssue::new(
            "ultrasound_date",
            "Enter the date of the ultrasound.",
        )),
        (None, None, Some(_)) => issues.push(ValidationIssue::new(
            "ga_days_at_ultrasound",
            "Days at ultrasound need the ultrasound date and gestational weeks.",
        )),
        _ => {}
    }

    if let Some(weeks) = inputs.ga_weeks_at_ultrasound
        && weeks > MAX_GA_WEEKS
    {
        issues.push(ValidationIssue::new(
            "ga_weeks_at_ultrasound",
            format!("Gestational age must be {MAX_GA_WEEKS} weeks or less."),
        ));
    }

    if let Some(days) = inputs.ga_days_at_ultrasound
        && days > 6
    {
        issues.push(ValidationIssue::new(
            "ga_days_at_ultrasound",
            "Days must be between 0 and 6.",
        ));
    }

    issues
}

pub fn validate_weight_loss(inputs: &WeightLossInputs) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let birth_ok = positive(inputs.birth_weight);
    let current_ok = positive(inputs.current_weight);
    if !birth_ok {
        issues.push(ValidationIssue::new(
            "birth_weight",
            "Birth weight must be greater than zero.",
        ));
    }
    if !current_ok {
        issues.push(ValidationIssue::new(
            "current_weight",
            "Current weight must be greater than zero.",
        ));
    }
    if birth_ok && current_ok && inputs.current_weight > inputs.birth_weight {
        issues.push(ValidationIssue::new(
            "current_weight",
            "Current weight is above birth weight; there is no weight loss to assess.",
        ));
    }

    if let Some(hours) = inputs.age_hours
        && !(hours.is_finite() && hours >= 0.0)
    {
        issues.push(ValidationIssue::new(
            "age_hours",
            "Age in hours cannot be negative.",
        ));
    }

    issues
}

pub fn validate_body_weight(inputs: &HeightWeightInputs) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !positive(inputs.height_cm) {
        issues.push(ValidationIssue::new(
            "height_cm",
            "Height must be greater than zero.",
        ));
    } else if inputs.height_cm < FIVE_FEET_CM {
        issues.push(ValidationIssue::new(
            "height_cm",
            format!("Height must be at least {FIVE_FEET_CM} cm (5 feet) for the Devine formula."),
        ));
    }

    if let Some(actual) = inputs.actual_weight_kg
        && !positive(actual)
    {
        issues.push(ValidationIssue::new(
            "actual_weight_kg",
            "Actual body weight must be greater than zero.",
        ));
    }

    issues
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
