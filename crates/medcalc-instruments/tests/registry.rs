use medcalc_core::models::{AnswerSet, Likert, YesNo};
use medcalc_instruments::error::InstrumentError;
use medcalc_instruments::instruments::phq9::Phq9;
use medcalc_instruments::instruments::stop_bang::StopBang;
use medcalc_instruments::{Instrument, all_instruments, check_answers, get_instrument};

#[test]
fn registry_lists_every_instrument_once() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["centor", "dass21", "phq9", "stop_bang"]);
}

#[test]
fn lookup_by_id() {
    assert_eq!(get_instrument("dass21").unwrap().name(), "DASS-21");
    assert!(get_instrument("gad7").is_none());
}

#[test]
fn catalog_ids_are_unique_per_instrument() {
    for instrument in all_instruments() {
        let mut ids: Vec<_> = instrument.questions().iter().map(|q| q.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "{}", instrument.id());
    }
}

#[test]
fn completeness_gate_applies_to_likert_instruments_only() {
    let gated: Vec<String> = all_instruments()
        .iter()
        .filter(|i| i.requires_complete())
        .map(|i| i.id().to_string())
        .collect();
    assert_eq!(gated, vec!["dass21", "phq9"]);
}

#[test]
fn incomplete_phq9_is_withheld() {
    let answers = AnswerSet::new().with("q1", Likert::new(2).unwrap());
    let err = check_answers(&Phq9, &answers).unwrap_err();
    match err {
        InstrumentError::Incomplete {
            instrument_id,
            missing,
        } => {
            assert_eq!(instrument_id, "phq9");
            assert_eq!(missing.len(), 8);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn partial_stop_bang_is_shown() {
    let answers = AnswerSet::new().with("snoring", YesNo::Yes);
    assert!(check_answers(&StopBang, &answers).is_ok());
}

#[test]
fn unknown_answer_ids_are_rejected() {
    let answers = AnswerSet::new().with("apnea", YesNo::Yes);
    let err = check_answers(&StopBang, &answers).unwrap_err();
    assert!(matches!(err, InstrumentError::Answer(ref issue) if issue.question_id == "apnea"));
    assert_eq!(err.to_string(), "invalid answer: STOP-BANG: unknown question 'apnea'");
}

#[test]
fn structured_text_lists_questions_in_order() {
    let text = get_instrument("dass21").unwrap().to_structured_text();
    assert!(text.starts_with("## DASS-21"));
    assert!(text.contains("1. [q1] I found it hard to wind down (Stress)"));
    assert!(text.contains("21. [q21] I felt that life was meaningless (Depression)"));
    assert!(text.contains("- 0: Did not apply to me at all"));
}
