use medcalc_core::error::CoreError;
use thiserror::Error;

use crate::scoring::AnswerIssue;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("invalid answer: {0}")]
    Answer(#[from] AnswerIssue),

    #[error("{instrument_id}: {} question(s) unanswered", missing.len())]
    Incomplete {
        instrument_id: String,
        missing: Vec<String>,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
