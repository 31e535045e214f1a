use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display tier attached to every score, lowest concern first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ColorTier {
    Green,
    Yellow,
    Orange,
    Red,
    DarkRed,
}

/// The scored outcome of a single-score instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub score: i32,
    pub label: String,
    pub color: ColorTier,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recommendation: Option<String>,
}
