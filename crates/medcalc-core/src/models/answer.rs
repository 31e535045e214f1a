use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A four-point Likert answer (0 = never/not at all … 3 = almost always).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct Likert(u8);

impl Likert {
    pub const MAX: u8 = 3;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::OutOfRange {
                field: "answer".to_string(),
                value: value.into(),
                min: 0,
                max: Self::MAX.into(),
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Likert {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Likert> for u8 {
    fn from(answer: Likert) -> Self {
        answer.0
    }
}

impl fmt::Display for Likert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl FromStr for YesNo {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Ok(YesNo::Yes),
            "no" | "n" | "false" | "0" => Ok(YesNo::No),
            _ => Err(CoreError::Parse {
                field: "answer".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// DASS-21 subscale a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Subscale {
    Depression,
    Anxiety,
    Stress,
}

impl Subscale {
    pub const ALL: [Subscale; 3] = [Subscale::Depression, Subscale::Anxiety, Subscale::Stress];

    pub fn label(self) -> &'static str {
        match self {
            Subscale::Depression => "Depression",
            Subscale::Anxiety => "Anxiety",
            Subscale::Stress => "Stress",
        }
    }
}

/// A fixed catalog entry. Catalogs are static data and never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscale: Option<Subscale>,
}

impl Question {
    pub const fn new(id: &'static str, prompt: &'static str) -> Self {
        Self {
            id,
            prompt,
            subscale: None,
        }
    }

    pub const fn tagged(id: &'static str, prompt: &'static str, subscale: Subscale) -> Self {
        Self {
            id,
            prompt,
            subscale: Some(subscale),
        }
    }
}

/// Answers keyed by question id. An unanswered question has no entry, so
/// sums over an answer set skip it without any sentinel comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet<A> {
    answers: BTreeMap<String, A>,
}

impl<A> Default for AnswerSet<A> {
    fn default() -> Self {
        Self {
            answers: BTreeMap::new(),
        }
    }
}

impl<A: Copy> AnswerSet<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, answer: A) -> Self {
        self.answers.insert(id.into(), answer);
        self
    }

    /// Record an answer, returning the one it replaced.
    pub fn set(&mut self, id: impl Into<String>, answer: A) -> Option<A> {
        self.answers.insert(id.into(), answer)
    }

    /// Mark a question unanswered again.
    pub fn clear(&mut self, id: &str) -> Option<A> {
        self.answers.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<A> {
        self.answers.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, A)> + '_ {
        self.answers.iter().map(|(id, answer)| (id.as_str(), *answer))
    }

    /// Answers for the given catalog, in catalog order, unanswered skipped.
    pub fn answered<'q>(
        &'q self,
        questions: &'q [Question],
    ) -> impl Iterator<Item = (&'q Question, A)> + 'q {
        questions
            .iter()
            .filter_map(move |q| self.get(q.id).map(|answer| (q, answer)))
    }

    /// True when every catalog question has an answer.
    pub fn is_complete(&self, questions: &[Question]) -> bool {
        questions.iter().all(|q| self.answers.contains_key(q.id))
    }

    pub fn answered_count(&self, questions: &[Question]) -> usize {
        self.answered(questions).count()
    }

    pub fn missing_ids(&self, questions: &[Question]) -> Vec<&'static str> {
        questions
            .iter()
            .filter(|q| !self.answers.contains_key(q.id))
            .map(|q| q.id)
            .collect()
    }

    /// Ids present in the set that the catalog does not recognize.
    pub fn unknown_ids(&self, questions: &[Question]) -> Vec<&str> {
        self.answers
            .keys()
            .filter(|id| !questions.iter().any(|q| q.id == id.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl<A, K: Into<String>> FromIterator<(K, A)> for AnswerSet<A> {
    fn from_iter<I: IntoIterator<Item = (K, A)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(|(k, a)| (k.into(), a)).collect(),
        }
    }
}
