use medcalc_core::band::{Band, BandTable};
use medcalc_core::models::{AnswerSet, ColorTier, Question, ScoreResult, YesNo};

use crate::Instrument;
use crate::scoring::{self, ResponseOption, ScoreRange, Tier, YES_NO};

/// STOP-BANG: obstructive sleep apnea screening.
/// 8 yes/no items, one point per yes. Total 0–8.
pub struct StopBang;

pub static QUESTIONS: [Question; 8] = [
    Question::new(
        "snoring",
        "Do you snore loudly (louder than talking or loud enough to be heard through closed doors)?",
    ),
    Question::new("tired", "Do you often feel tired, fatigued, or sleepy during the daytime?"),
    Question::new(
        "observed",
        "Has anyone observed you stop breathing or choking/gasping during your sleep?",
    ),
    Question::new("pressure", "Do you have or are you being treated for high blood pressure?"),
    Question::new("bmi", "Is your BMI more than 35 kg/m²?"),
    Question::new("age", "Are you older than 50?"),
    Question::new("neck", "Is your neck circumference greater than 40 cm?"),
    Question::new("gender", "Are you male?"),
];

pub static RISK_TIERS: BandTable<Tier> = BandTable::new(
    &[
        Band {
            upper: 2.0,
            value: Tier::advising(
                "Low risk of OSA",
                ColorTier::Green,
                "No further sleep evaluation needed unless symptoms develop.",
            ),
        },
        Band {
            upper: 4.0,
            value: Tier::advising(
                "Intermediate risk of OSA",
                ColorTier::Orange,
                "Consider referral for a sleep study.",
            ),
        },
    ],
    Tier::advising(
        "High risk of OSA",
        ColorTier::Red,
        "Refer for polysomnography and sleep medicine evaluation.",
    ),
);

/// Unanswered items count as "no", matching the form's defaults.
pub fn calculate_stop_bang_score(answers: &AnswerSet<YesNo>) -> ScoreResult {
    let score = answers
        .answered(&QUESTIONS)
        .filter(|(_, answer)| answer.is_yes())
        .count() as i32;
    tracing::debug!(score, "STOP-BANG scored");
    scoring::classify(&RISK_TIERS, score)
}

impl Instrument for StopBang {
    fn id(&self) -> &str {
        "stop_bang"
    }

    fn name(&self) -> &str {
        "STOP-BANG"
    }

    fn description(&self) -> &str {
        "Screening questionnaire for obstructive sleep apnea (OSA)."
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }

    fn response_options(&self) -> &[ResponseOption] {
        &YES_NO
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange { min: 0, max: 8 }
    }

    fn requires_complete(&self) -> bool {
        false
    }
}
