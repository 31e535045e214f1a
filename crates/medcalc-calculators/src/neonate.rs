use medcalc_core::band::{Band, BandTable};
use medcalc_core::models::{
    AgeWindow, WeightLossInputs, WeightLossInterpretation, WeightLossResult, WeightLossSeverity,
    WeightUnit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightLossTier {
    pub severity: WeightLossSeverity,
    pub message: &'static str,
}

const fn tier(severity: WeightLossSeverity, message: &'static str) -> WeightLossTier {
    WeightLossTier { severity, message }
}

const NORMAL: WeightLossTier = tier(
    WeightLossSeverity::Normal,
    "Weight loss is within the expected range for age.",
);
const CONCERN: WeightLossTier = tier(
    WeightLossSeverity::Concern,
    "Weight loss is above the expected range for age. Assess feeding and consider lactation support.",
);
const DANGER: WeightLossTier = tier(
    WeightLossSeverity::Danger,
    "Excessive weight loss for age. Evaluate promptly for dehydration and feeding problems.",
);

/// Which table applies, by hours of life. Older than 72 hours uses the
/// general table.
pub static AGE_WINDOWS: BandTable<AgeWindow> = BandTable::new(
    &[
        Band { upper: 24.0, value: AgeWindow::FirstDay },
        Band { upper: 48.0, value: AgeWindow::SecondDay },
        Band { upper: 72.0, value: AgeWindow::ThirdDay },
    ],
    AgeWindow::General,
);

pub static FIRST_DAY: BandTable<WeightLossTier> = BandTable::new(
    &[Band { upper: 4.0, value: NORMAL }, Band { upper: 5.0, value: CONCERN }],
    DANGER,
);

pub static SECOND_DAY: BandTable<WeightLossTier> = BandTable::new(
    &[Band { upper: 7.0, value: NORMAL }, Band { upper: 8.0, value: CONCERN }],
    DANGER,
);

/// No concern tier on day three.
pub static THIRD_DAY: BandTable<WeightLossTier> =
    BandTable::new(&[Band { upper: 10.0, value: NORMAL }], DANGER);

/// Applied past 72 hours and whenever age is unknown.
pub static GENERAL: BandTable<WeightLossTier> = BandTable::new(
    &[Band { upper: 7.0, value: NORMAL }, Band { upper: 10.0, value: CONCERN }],
    DANGER,
);

pub fn thresholds(window: AgeWindow) -> &'static BandTable<WeightLossTier> {
    match window {
        AgeWindow::FirstDay => &FIRST_DAY,
        AgeWindow::SecondDay => &SECOND_DAY,
        AgeWindow::ThirdDay => &THIRD_DAY,
        AgeWindow::General => &GENERAL,
    }
}

pub fn age_window(age_hours: Option<f64>) -> AgeWindow {
    age_hours.map_or(AgeWindow::General, |hours| *AGE_WINDOWS.classify(hours))
}

/// Percentage weight change since birth. Performs no validation: a weight
/// gain comes back as a negative change.
pub fn calculate_neonate_weight_loss(
    birth_weight: f64,
    current_weight: f64,
    unit: WeightUnit,
    age_hours: Option<f64>,
) -> WeightLossResult {
    let birth_grams = unit.to_grams(birth_weight);
    let current_grams = unit.to_grams(current_weight);

    let weight_change_grams = birth_grams - current_grams;
    let percentage_change = round_percentage(weight_change_grams * 100.0 / birth_grams);

    let window = age_window(age_hours);
    let tier = thresholds(window).classify(percentage_change);

    tracing::debug!(
        percentage_change,
        ?window,
        severity = ?tier.severity,
        "neonatal weight change calculated"
    );

    WeightLossResult {
        weight_change_grams,
        percentage_change,
        interpretation: WeightLossInterpretation {
            message: tier.message.to_string(),
            severity: tier.severity,
        },
        age_window: window,
    }
}

/// Percentages are kept to six decimal places. Cutoffs are inclusive, so
/// conversion noise below that must not push a loss over one.
const PERCENTAGE_SCALE: f64 = 1e6;

fn round_percentage(value: f64) -> f64 {
    (value * PERCENTAGE_SCALE).round() / PERCENTAGE_SCALE
}

pub fn from_inputs(inputs: &WeightLossInputs) -> WeightLossResult {
    calculate_neonate_weight_loss(
        inputs.birth_weight,
        inputs.current_weight,
        inputs.unit,
        inputs.age_hours,
    )
}
