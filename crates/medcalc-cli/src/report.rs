use medcalc_core::models::{
    BodyWeightResult, ColorTier, DatingMethod, PregnancyInfo, ScoreResult, WeightLossResult,
    WeightLossSeverity,
};
use medcalc_instruments::instruments::dass21::DassResult;
use medcalc_instruments::instruments::phq9::Phq9Result;
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Debug, Clone, Serialize)]
pub struct InstrumentSummary {
    pub id: String,
    pub name: String,
}

/// What a command produced, before formatting.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Instruments(Vec<InstrumentSummary>),
    Catalog(String),
    Pregnancy(PregnancyInfo),
    Neonate(WeightLossResult),
    BodyWeight(BodyWeightResult),
    Score {
        instrument: String,
        #[serde(flatten)]
        result: ScoreResult,
    },
    Phq9(Phq9Result),
    Dass(DassResult),
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Report::Instruments(list) => list
                .iter()
                .map(|i| format!("{:<10} {}", i.id, i.name))
                .collect::<Vec<_>>()
                .join("\n"),

            Report::Catalog(text) => text.trim_end().to_string(),

            Report::Pregnancy(info) => {
                let method = match info.method {
                    DatingMethod::Lmp => "LMP",
                    DatingMethod::Ultrasound => "ultrasound",
                };
                [
                    format!("Estimated due date: {} ({method} dating)", info.due_date),
                    format!(
                        "Gestational age:    {} weeks {} days",
                        info.gestational_age.weeks, info.gestational_age.days
                    ),
                    format!("Trimester:          {}", info.trimester.number()),
                    format!("Days until due:     {}", info.days_until_due),
                ]
                .join("\n")
            }

            Report::Neonate(result) => {
                let severity = match result.interpretation.severity {
                    WeightLossSeverity::Normal => "normal",
                    WeightLossSeverity::Concern => "concern",
                    WeightLossSeverity::Danger => "danger",
                };
                format!(
                    "Weight change: {:.0} g ({:.2}%)\n[{severity}] {}",
                    result.weight_change_grams,
                    result.percentage_change,
                    result.interpretation.message
                )
            }

            Report::BodyWeight(result) => {
                let mut text = format!("Ideal body weight:    {:.1} kg", result.ideal_body_weight_kg);
                if let Some(adjusted) = result.adjusted_body_weight_kg {
                    text.push_str(&format!("\nAdjusted body weight: {adjusted:.1} kg"));
                }
                text
            }

            Report::Score { instrument, result } => score_text(instrument, result),

            Report::Phq9(phq9) => {
                let mut text = score_text("PHQ-9", &phq9.result);
                if phq9.self_harm_flag {
                    text.push_str("\nWARNING: item 9 positive. Assess suicide risk today.");
                }
                text
            }

            Report::Dass(dass) => [&dass.depression, &dass.anxiety, &dass.stress]
                .iter()
                .map(|s| {
                    format!(
                        "{:<10} {:>2}  {} [{}]",
                        s.subscale.label(),
                        s.score,
                        s.severity,
                        color_name(s.color)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn score_text(instrument: &str, result: &ScoreResult) -> String {
    let mut text = format!(
        "{instrument}: {} ({}) [{}]",
        result.score,
        result.label,
        color_name(result.color)
    );
    if let Some(recommendation) = &result.recommendation {
        text.push('\n');
        text.push_str(recommendation);
    }
    text
}

fn color_name(color: ColorTier) -> &'static str {
    match color {
        ColorTier::Green => "green",
        ColorTier::Yellow => "yellow",
        ColorTier::Orange => "orange",
        ColorTier::Red => "red",
        ColorTier::DarkRed => "dark red",
    }
}
