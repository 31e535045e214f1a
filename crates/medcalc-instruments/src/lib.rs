//! medcalc-instruments
//!
//! Questionnaire instruments. Pure data plus scoring: each instrument owns
//! its fixed question catalog, the answers it accepts, and the threshold
//! tables its totals map through.

pub mod error;
pub mod instruments;
pub mod scoring;

use medcalc_core::models::{AnswerSet, Question};

use error::InstrumentError;
use scoring::{AnswerIssue, ResponseOption, ScoreRange};

/// Trait implemented by each questionnaire instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "phq9", "stop_bang").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// The ordered question catalog.
    fn questions(&self) -> &[Question];

    /// Answers each question accepts.
    fn response_options(&self) -> &[ResponseOption];

    /// Range of the total (or of each subscale total).
    fn score_range(&self) -> ScoreRange;

    /// Whether results may only be shown once every question is answered.
    /// Instruments whose fields all have defaults score immediately.
    fn requires_complete(&self) -> bool;

    /// Report answer ids the catalog does not recognize.
    fn validate_answer_ids(&self, ids: &[&str]) -> Vec<AnswerIssue> {
        ids.iter()
            .filter(|id| !self.questions().iter().any(|q| q.id == **id))
            .map(|id| AnswerIssue {
                question_id: id.to_string(),
                message: format!("{}: unknown question '{id}'", self.name()),
            })
            .collect()
    }

    /// Render the catalog as plain structured text.
    fn to_structured_text(&self) -> String {
        let mut output = format!("## {}\n\n{}\n\n", self.name(), self.description());

        output.push_str("### Responses\n");
        for option in self.response_options() {
            output.push_str(&format!("- {}: {}\n", option.value, option.label));
        }
        output.push('\n');

        output.push_str("### Questions\n");
        for (n, question) in self.questions().iter().enumerate() {
            match question.subscale {
                Some(subscale) => output.push_str(&format!(
                    "{}. [{}] {} ({})\n",
                    n + 1,
                    question.id,
                    question.prompt,
                    subscale.label()
                )),
                None => output.push_str(&format!(
                    "{}. [{}] {}\n",
                    n + 1,
                    question.id,
                    question.prompt
                )),
            }
        }
        output
    }
}

/// Gate for showing results: unknown ids are rejected, and instruments that
/// require completeness reject unanswered questions.
pub fn check_answers<A: Copy>(
    instrument: &dyn Instrument,
    answers: &AnswerSet<A>,
) -> Result<(), InstrumentError> {
    let ids: Vec<&str> = answers.iter().map(|(id, _)| id).collect();
    if let Some(issue) = instrument.validate_answer_ids(&ids).into_iter().next() {
        return Err(issue.into());
    }

    if instrument.requires_complete() {
        let missing = answers.missing_ids(instrument.questions());
        if !missing.is_empty() {
            return Err(InstrumentError::Incomplete {
                instrument_id: instrument.id().to_string(),
                missing: missing.into_iter().map(str::to_string).collect(),
            });
        }
    }
    Ok(())
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::centor::Centor),
        Box::new(instruments::dass21::Dass21),
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::stop_bang::StopBang),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
