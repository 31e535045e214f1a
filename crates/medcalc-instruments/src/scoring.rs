use medcalc_core::band::BandTable;
use medcalc_core::models::{AnswerSet, ColorTier, Likert, Question, ScoreResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The span of totals an instrument can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

impl ScoreRange {
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One selectable answer as shown on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: u8,
    pub label: &'static str,
}

pub static YES_NO: [ResponseOption; 2] = [
    ResponseOption { value: 0, label: "No" },
    ResponseOption { value: 1, label: "Yes" },
];

/// Band value shared by the questionnaire threshold tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub label: &'static str,
    pub color: ColorTier,
    pub recommendation: Option<&'static str>,
}

impl Tier {
    pub const fn new(label: &'static str, color: ColorTier) -> Self {
        Self {
            label,
            color,
            recommendation: None,
        }
    }

    pub const fn advising(label: &'static str, color: ColorTier, recommendation: &'static str) -> Self {
        Self {
            label,
            color,
            recommendation: Some(recommendation),
        }
    }

    pub fn to_result(&self, score: i32) -> ScoreResult {
        ScoreResult {
            score,
            label: self.label.to_string(),
            color: self.color,
            recommendation: self.recommendation.map(str::to_string),
        }
    }
}

/// Classify a total through a tier table.
pub fn classify(table: &BandTable<Tier>, score: i32) -> ScoreResult {
    table.classify(f64::from(score)).to_result(score)
}

/// Sum the answered Likert values of the catalog questions that pass `filter`.
pub fn sum_likert(
    answers: &AnswerSet<Likert>,
    questions: &[Question],
    filter: impl Fn(&Question) -> bool,
) -> i32 {
    answers
        .answered(questions)
        .filter(|(q, _)| filter(q))
        .map(|(_, answer)| i32::from(answer.value()))
        .sum()
}

/// A problem with an answer set, phrased for display next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerIssue {
    pub question_id: String,
    pub message: String,
}
