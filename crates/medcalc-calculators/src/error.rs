use medcalc_core::error::CoreError;
use thiserror::Error;

use crate::validate::ValidationIssue;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("{}", join_messages(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("{field}: '{value}' is not a valid {expected}")]
    Parse {
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}

fn join_messages(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
