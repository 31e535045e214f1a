use jiff::civil::date;
use medcalc_calculators::pregnancy::{TRIMESTERS, calculate_pregnancy_info};
use medcalc_core::models::{DatingMethod, PregnancyInputs, Trimester};

#[test]
fn missing_lmp_returns_none() {
    let inputs = PregnancyInputs {
        ultrasound_date: Some(date(2024, 1, 29)),
        ga_weeks_at_ultrasound: Some(6),
        ..PregnancyInputs::default()
    };
    assert!(calculate_pregnancy_info(&inputs, date(2024, 3, 1)).is_none());
}

#[test]
fn lmp_dating_adds_280_days() {
    let inputs = PregnancyInputs::from_lmp(date(2024, 1, 1));
    let info = calculate_pregnancy_info(&inputs, date(2024, 1, 1)).unwrap();

    assert_eq!(info.method, DatingMethod::Lmp);
    assert_eq!(info.anchor_date, date(2024, 1, 1));
    assert_eq!(info.due_date, date(2024, 10, 7));
    assert_eq!(info.gestational_age.total_days, 0);
    assert_eq!(info.days_until_due, 280);
    assert_eq!(info.trimester, Trimester::First);
}

#[test]
fn ultrasound_measurement_corrects_the_anchor() {
    let inputs = PregnancyInputs::from_lmp(date(2024, 1, 1)).with_ultrasound(date(2024, 1, 29), 6, 0);
    let info = calculate_pregnancy_info(&inputs, date(2024, 3, 1)).unwrap();

    assert_eq!(info.method, DatingMethod::Ultrasound);
    assert_eq!(info.anchor_date, date(2023, 12, 18));
    assert_eq!(info.due_date, date(2024, 9, 23));
    assert_eq!(info.gestational_age.weeks, 10);
    assert_eq!(info.gestational_age.days, 4);
    assert_eq!(info.days_until_due, 206);
}

#[test]
fn ultrasound_days_default_to_zero() {
    let inputs = PregnancyInputs {
        lmp_date: Some(date(2024, 1, 1)),
        ultrasound_date: Some(date(2024, 1, 29)),
        ga_weeks_at_ultrasound: Some(6),
        ga_days_at_ultrasound: None,
    };
    let info = calculate_pregnancy_info(&inputs, date(2024, 3, 1)).unwrap();
    assert_eq!(info.anchor_date, date(2023, 12, 18));
}

#[test]
fn ultrasound_days_shift_the_anchor() {
    let inputs = PregnancyInputs::from_lmp(date(2024, 1, 1)).with_ultrasound(date(2024, 1, 29), 6, 3);
    let info = calculate_pregnancy_info(&inputs, date(2024, 3, 1)).unwrap();
    assert_eq!(info.anchor_date, date(2023, 12, 15));
    assert_eq!(info.due_date, date(2024, 9, 20));
}

#[test]
fn scan_date_without_measurement_falls_back_to_lmp() {
    let inputs = PregnancyInputs {
        lmp_date: Some(date(2024, 1, 1)),
        ultrasound_date: Some(date(2024, 1, 29)),
        ..PregnancyInputs::default()
    };
    let info = calculate_pregnancy_info(&inputs, date(2024, 3, 1)).unwrap();
    assert_eq!(info.method, DatingMethod::Lmp);
    assert_eq!(info.anchor_date, date(2024, 1, 1));
}

#[test]
fn trimester_boundaries() {
    let inputs = PregnancyInputs::from_lmp(date(2024, 1, 1));
    let at = |today| calculate_pregnancy_info(&inputs, today).unwrap();

    let end_of_first = at(date(2024, 3, 31));
    assert_eq!((end_of_first.gestational_age.weeks, end_of_first.gestational_age.days), (12, 6));
    assert_eq!(end_of_first.trimester, Trimester::First);

    assert_eq!(at(date(2024, 4, 1)).trimester, Trimester::Second);
    assert_eq!(at(date(2024, 7, 7)).trimester, Trimester::Second);
    assert_eq!(at(date(2024, 7, 8)).trimester, Trimester::Third);
    assert!(TRIMESTERS.is_ascending());
}

#[test]
fn date_before_anchor_gives_negative_age() {
    let inputs = PregnancyInputs::from_lmp(date(2024, 1, 1));
    let info = calculate_pregnancy_info(&inputs, date(2023, 12, 22)).unwrap();

    assert_eq!(info.gestational_age.total_days, -10);
    assert_eq!(info.gestational_age.weeks, -1);
    assert_eq!(info.gestational_age.days, -3);
    assert_eq!(info.trimester, Trimester::First);
    assert_eq!(info.days_until_due, 290);
}

#[test]
fn overdue_pregnancies_count_down_past_zero() {
    let inputs = PregnancyInputs::from_lmp(date(2024, 1, 1));
    let info = calculate_pregnancy_info(&inputs, date(2024, 10, 14)).unwrap();
    assert_eq!(info.days_until_due, -7);
    assert_eq!(info.gestational_age.weeks, 41);
}

#[test]
fn out_of_range_arithmetic_returns_none() {
    let inputs = PregnancyInputs::from_lmp(date(9999, 12, 1));
    assert!(calculate_pregnancy_info(&inputs, date(9999, 12, 2)).is_none());
}

#[test]
fn result_serializes_dates_as_iso_strings() {
    let inputs = PregnancyInputs::from_lmp(date(2024, 1, 1));
    let info = calculate_pregnancy_info(&inputs, date(2024, 1, 15)).unwrap();
    let json = serde_json::to_value(info).unwrap();
    assert_eq!(json["due_date"], "2024-10-07");
    assert_eq!(json["method"], "lmp");
    assert_eq!(json["trimester"], "first");
}

#[test]
fn current_date_variant_uses_the_clock() {
    let inputs = PregnancyInputs::from_lmp(date(2000, 1, 1));
    let info = medcalc_calculators::calculate_pregnancy_info_now(&inputs).unwrap();
    assert_eq!(info.due_date, date(2000, 10, 7));
    assert!(info.gestational_age.total_days > 365 * 20);
    assert_eq!(info.trimester, Trimester::Third);
}
