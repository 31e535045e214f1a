use medcalc_core::models::{BodyWeightResult, Gender, HeightWeightInputs};

pub const CM_PER_INCH: f64 = 2.54;

/// Devine formula baseline height. Shorter patients are out of its range.
pub const FIVE_FEET_CM: f64 = 152.4;

pub const KG_PER_INCH: f64 = 2.3;

/// Fraction of the excess over IBW counted toward adjusted body weight.
pub const ADJUSTMENT_FACTOR: f64 = 0.4;

fn base_weight_kg(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 50.0,
        Gender::Female => 45.5,
    }
}

/// Devine ideal body weight in kilograms.
pub fn calculate_ibw(height_cm: f64, gender: Gender) -> f64 {
    let inches_over_five_feet = ((height_cm - FIVE_FEET_CM) / CM_PER_INCH).max(0.0);
    base_weight_kg(gender) + KG_PER_INCH * inches_over_five_feet
}

/// Adjusted body weight for patients heavier than their IBW; otherwise the
/// actual weight unchanged.
pub fn calculate_adj_bw(ibw: f64, actual_bw: f64) -> f64 {
    if actual_bw <= ibw {
        return actual_bw;
    }
    ibw + ADJUSTMENT_FACTOR * (actual_bw - ibw)
}

pub fn calculate_body_weight(inputs: &HeightWeightInputs) -> BodyWeightResult {
    let ideal_body_weight_kg = calculate_ibw(inputs.height_cm, inputs.gender);
    let adjusted_body_weight_kg = inputs
        .actual_weight_kg
        .map(|actual| calculate_adj_bw(ideal_body_weight_kg, actual));

    tracing::debug!(
        height_cm = inputs.height_cm,
        gender = %inputs.gender,
        ideal_body_weight_kg,
        "body weight calculated"
    );

    BodyWeightResult {
        ideal_body_weight_kg,
        adjusted_body_weight_kg,
    }
}
