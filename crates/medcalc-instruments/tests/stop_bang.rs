use medcalc_core::models::{AnswerSet, ColorTier, YesNo};
use medcalc_instruments::instruments::stop_bang::{QUESTIONS, calculate_stop_bang_score};

fn with_yes(count: usize) -> AnswerSet<YesNo> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(n, q)| (q.id, YesNo::from(n < count)))
        .collect()
}

#[test]
fn catalog_has_eight_items() {
    let ids: Vec<_> = QUESTIONS.iter().map(|q| q.id).collect();
    assert_eq!(
        ids,
        vec!["snoring", "tired", "observed", "pressure", "bmi", "age", "neck", "gender"]
    );
}

#[test]
fn each_yes_adds_one() {
    for count in 0..=8 {
        assert_eq!(calculate_stop_bang_score(&with_yes(count)).score, count as i32);
    }
}

#[test]
fn risk_buckets() {
    for (count, label, color) in [
        (0, "Low risk of OSA", ColorTier::Green),
        (2, "Low risk of OSA", ColorTier::Green),
        (3, "Intermediate risk of OSA", ColorTier::Orange),
        (4, "Intermediate risk of OSA", ColorTier::Orange),
        (5, "High risk of OSA", ColorTier::Red),
        (8, "High risk of OSA", ColorTier::Red),
    ] {
        let result = calculate_stop_bang_score(&with_yes(count));
        assert_eq!(result.label, label, "{count} yes answers");
        assert_eq!(result.color, color);
    }
}

#[test]
fn missing_answers_count_as_no() {
    let answers = AnswerSet::new()
        .with("snoring", YesNo::Yes)
        .with("neck", YesNo::Yes)
        .with("gender", YesNo::No);
    assert_eq!(calculate_stop_bang_score(&answers).score, 2);
    assert_eq!(calculate_stop_bang_score(&AnswerSet::new()).score, 0);
}
