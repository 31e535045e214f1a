use std::str::FromStr;

use medcalc_core::band::{Band, BandTable};
use medcalc_core::error::CoreError;
use medcalc_core::models::{ColorTier, Question, ScoreResult};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::scoring::{self, ResponseOption, ScoreRange, Tier, YES_NO};

/// Modified Centor (McIsaac) score for streptococcal pharyngitis.
/// Four clinical criteria plus an age adjustment. Total -1 to 5.
pub struct Centor;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AgeBand {
    #[serde(rename = "under15")]
    Under15,
    #[default]
    #[serde(rename = "15to44")]
    From15To44,
    #[serde(rename = "over44")]
    Over44,
}

impl AgeBand {
    pub fn adjustment(self) -> i32 {
        match self {
            AgeBand::Under15 => 1,
            AgeBand::From15To44 => 0,
            AgeBand::Over44 => -1,
        }
    }
}

impl FromStr for AgeBand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "under15" => Ok(AgeBand::Under15),
            "15to44" => Ok(AgeBand::From15To44),
            "over44" => Ok(AgeBand::Over44),
            _ => Err(CoreError::Parse {
                field: "age_band".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Every field has a default, so a fresh form scores immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CentorAnswers {
    pub tonsillar_exudate: bool,
    pub swollen_tender_nodes: bool,
    pub fever_over_38: bool,
    pub cough_absent: bool,
    pub age_band: AgeBand,
}

impl CentorAnswers {
    pub fn criteria_met(&self) -> i32 {
        [
            self.tonsillar_exudate,
            self.swollen_tender_nodes,
            self.fever_over_38,
            self.cough_absent,
        ]
        .into_iter()
        .filter(|met| *met)
        .count() as i32
    }
}

pub static QUESTIONS: [Question; 4] = [
    Question::new("tonsillar_exudate", "Tonsillar exudate or swelling"),
    Question::new("swollen_tender_nodes", "Tender or swollen anterior cervical lymph nodes"),
    Question::new("fever_over_38", "Temperature above 38°C (100.4°F)"),
    Question::new("cough_absent", "Cough absent"),
];

pub static RISK_TIERS: BandTable<Tier> = BandTable::new(
    &[
        Band {
            upper: 1.0,
            value: Tier::advising(
                "<10% risk of Strep",
                ColorTier::Green,
                "No further testing or antibiotics indicated.",
            ),
        },
        Band {
            upper: 2.0,
            value: Tier::advising(
                "11-17% risk of Strep",
                ColorTier::Yellow,
                "Optional rapid strep testing and/or culture; treat only if positive.",
            ),
        },
        Band {
            upper: 3.0,
            value: Tier::advising(
                "28-35% risk of Strep",
                ColorTier::Orange,
                "Rapid strep testing and/or culture recommended; treat if positive.",
            ),
        },
    ],
    Tier::advising(
        ">50% risk of Strep",
        ColorTier::Red,
        "Consider rapid strep testing and/or culture, or empiric antibiotics.",
    ),
);

pub fn calculate_centor_score(answers: &CentorAnswers) -> ScoreResult {
    let score = answers.criteria_met() + answers.age_band.adjustment();
    tracing::debug!(score, age_band = ?answers.age_band, "centor score calculated");
    scoring::classify(&RISK_TIERS, score)
}

impl Instrument for Centor {
    fn id(&self) -> &str {
        "centor"
    }

    fn name(&self) -> &str {
        "Centor Score (Modified/McIsaac)"
    }

    fn description(&self) -> &str {
        "Estimates the likelihood of streptococcal pharyngitis. One point per criterion; \
         age under 15 adds a point, age over 44 subtracts one."
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }

    fn response_options(&self) -> &[ResponseOption] {
        &YES_NO
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange { min: -1, max: 5 }
    }

    fn requires_complete(&self) -> bool {
        false
    }
}
