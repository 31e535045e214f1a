//! Text-field parsing. Malformed input fails fast with the field name so
//! the form can point at it.

use jiff::civil::Date;
use medcalc_core::models::{AnswerSet, Likert, Question};

use crate::error::CalculatorError;

/// Marks an unanswered item in a comma-separated answer list.
pub const UNANSWERED: &str = "-";

pub fn parse_number(field: &str, text: &str) -> Result<f64, CalculatorError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| parse_error(field, text, "number"))
}

/// Blank input means "not given".
pub fn parse_optional_number(field: &str, text: &str) -> Result<Option<f64>, CalculatorError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_number(field, text).map(Some)
}

pub fn parse_whole_number(field: &str, text: &str) -> Result<u32, CalculatorError> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| parse_error(field, text, "whole number"))
}

/// ISO 8601 calendar date, e.g. `2024-01-29`.
pub fn parse_date(field: &str, text: &str) -> Result<Date, CalculatorError> {
    text.trim()
        .parse::<Date>()
        .map_err(|_| parse_error(field, text, "date (YYYY-MM-DD)"))
}

/// Parse one answer per catalog question, in catalog order. `-` leaves a
/// question unanswered.
pub fn parse_likert_answers(
    text: &str,
    questions: &[Question],
) -> Result<AnswerSet<Likert>, CalculatorError> {
    let values: Vec<&str> = text.split(',').map(str::trim).collect();
    if values.len() != questions.len() {
        return Err(CalculatorError::AnswerCount {
            expected: questions.len(),
            actual: values.len(),
        });
    }

    let mut answers = AnswerSet::new();
    for (question, value) in questions.iter().zip(values) {
        if value == UNANSWERED {
            continue;
        }
        let raw = value
            .parse::<u8>()
            .map_err(|_| parse_error(question.id, value, "answer (0-3)"))?;
        answers.set(question.id, Likert::new(raw)?);
    }
    Ok(answers)
}

fn parse_error(field: &str, text: &str, expected: &'static str) -> CalculatorError {
    CalculatorError::Parse {
        field: field.to_string(),
        value: text.to_string(),
        expected,
    }
}
