use jiff::civil::date;
use medcalc_calculators::error::CalculatorError;
use medcalc_calculators::validate::{
    ensure, validate_body_weight, validate_pregnancy, validate_weight_loss,
};
use medcalc_core::models::{Gender, HeightWeightInputs, PregnancyInputs, WeightLossInputs, WeightUnit};

fn fields(issues: &[medcalc_calculators::validate::ValidationIssue]) -> Vec<&str> {
    issues.iter().map(|i| i.field.as_str()).collect()
}

#[test]
fn pregnancy_requires_lmp() {
    let issues = validate_pregnancy(&PregnancyInputs::default(), date(2024, 3, 1));
    assert_eq!(fields(&issues), vec!["lmp_date"]);
}

#[test]
fn ultrasound_before_lmp_is_rejected() {
    let inputs = PregnancyInputs::from_lmp(date(2024, 1, 10)).with_ultrasound(date(2024, 1, 5), 6, 0);
    let issues = validate_pregnancy(&inputs, date(2024, 3, 1));
    assert_eq!(fields(&issues), vec!["ultrasound_date"]);
    assert!(issues[0].message.contains("before the last menstrual period"));
}

#[test]
fn ultrasound_measurement_needs_both_parts() {
    let no_weeks = PregnancyInputs {
        lmp_date: Some(date(2024, 1, 1)),
        ultrasound_date: Some(date(2024, 2, 1)),
        ..PregnancyInputs::default()
    };
    assert_eq!(
        fields(&validate_pregnancy(&no_weeks, date(2024, 3, 1))),
        vec!["ga_weeks_at_ultrasound"]
    );

    let no_date = PregnancyInputs {
        lmp_date: Some(date(2024, 1, 1)),
        ga_weeks_at_ultrasound: Some(8),
        ..PregnancyInputs::default()
    };
    assert_eq!(
        fields(&validate_pregnancy(&no_date, date(2024, 3, 1))),
        vec!["ultrasound_date"]
    );
}

#[test]
fn ultrasound_days_alone_are_rejected() {
    let inputs = PregnancyInputs {
        lmp_date: Some(date(2024, 1, 1)),
        ga_days_at_ultrasound: Some(3),
        ..PregnancyInputs::default()
    };
    let issues = validate_pregnancy(&inputs, date(2024, 3, 1));
    assert_eq!(fields(&issues), vec!["ga_days_at_ultrasound"]);
    assert!(issues[0].message.contains("ultrasound date and gestational weeks"));

    let with_date = PregnancyInputs {
        ultrasound_date: Some(date(2024, 2, 1)),
        ..inputs
    };
    assert_eq!(
        fields(&validate_pregnancy(&with_date, date(2024, 3, 1))),
        vec!["ga_weeks_at_ultrasound"]
    );
}

#[test]
fn ultrasound_days_stay_within_a_week() {
    let inputs = PregnancyInputs::from_lmp(date(2024, 1, 1)).with_ultrasound(date(2024, 2, 1), 6, 7);
    let issues = validate_pregnancy(&inputs, date(2024, 3, 1));
    assert_eq!(fields(&issues), vec!["ga_days_at_ultrasound"]);
}

#[test]
fn future_dates_are_rejected() {
    let inputs = PregnancyInputs::from_lmp(date(2024, 4, 1));
    let issues = validate_pregnancy(&inputs, date(2024, 3, 1));
    assert_eq!(fields(&issues), vec!["lmp_date"]);
}

#[test]
fn valid_pregnancy_inputs_pass() {
    let inputs = PregnancyInputs::from_lmp(date(2024, 1, 1)).with_ultrasound(date(2024, 1, 29), 6, 0);
    assert!(validate_pregnancy(&inputs, date(2024, 3, 1)).is_empty());
}

#[test]
fn weights_must_be_positive() {
    let inputs = WeightLossInputs {
        birth_weight: 0.0,
        current_weight: -1.0,
        unit: WeightUnit::Grams,
        age_hours: None,
    };
    assert_eq!(
        fields(&validate_weight_loss(&inputs)),
        vec!["birth_weight", "current_weight"]
    );
}

#[test]
fn current_weight_above_birth_weight_is_rejected() {
    let inputs = WeightLossInputs {
        birth_weight: 3.0,
        current_weight: 3.2,
        unit: WeightUnit::Kilograms,
        age_hours: Some(30.0),
    };
    let issues = validate_weight_loss(&inputs);
    assert_eq!(fields(&issues), vec!["current_weight"]);

    let err = ensure(issues).unwrap_err();
    assert!(matches!(err, CalculatorError::Validation(ref list) if list.len() == 1));
    assert_eq!(
        err.to_string(),
        "Current weight is above birth weight; there is no weight loss to assess."
    );
}

#[test]
fn negative_age_is_rejected() {
    let inputs = WeightLossInputs {
        birth_weight: 3500.0,
        current_weight: 3400.0,
        unit: WeightUnit::Grams,
        age_hours: Some(-2.0),
    };
    assert_eq!(fields(&validate_weight_loss(&inputs)), vec!["age_hours"]);
}

#[test]
fn height_must_reach_five_feet() {
    let short = HeightWeightInputs {
        gender: Gender::Female,
        height_cm: 150.0,
        actual_weight_kg: None,
    };
    let issues = validate_body_weight(&short);
    assert_eq!(fields(&issues), vec!["height_cm"]);
    assert!(issues[0].message.contains("152.4 cm"));

    let ok = HeightWeightInputs {
        height_cm: 152.4,
        ..short
    };
    assert!(ensure(validate_body_weight(&ok)).is_ok());
}

#[test]
fn actual_weight_must_be_positive_when_given() {
    let inputs = HeightWeightInputs {
        gender: Gender::Male,
        height_cm: 175.0,
        actual_weight_kg: Some(0.0),
    };
    assert_eq!(fields(&validate_body_weight(&inputs)), vec!["actual_weight_kg"]);
}
