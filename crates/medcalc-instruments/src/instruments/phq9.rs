use medcalc_core::band::{Band, BandTable};
use medcalc_core::models::{AnswerSet, ColorTier, Likert, Question, ScoreResult};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::scoring::{self, ResponseOption, ScoreRange, Tier};

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

/// Item 9 asks about thoughts of death or self-harm.
pub const SELF_HARM_QUESTION: &str = "q9";

pub static RESPONSES: [ResponseOption; 4] = [
    ResponseOption { value: 0, label: "Not at all" },
    ResponseOption { value: 1, label: "Several days" },
    ResponseOption { value: 2, label: "More than half the days" },
    ResponseOption { value: 3, label: "Nearly every day" },
];

pub static QUESTIONS: [Question; 9] = [
    Question::new("q1", "Little interest or pleasure in doing things"),
    Question::new("q2", "Feeling down, depressed, or hopeless"),
    Question::new("q3", "Trouble falling or staying asleep, or sleeping too much"),
    Question::new("q4", "Feeling tired or having little energy"),
    Question::new("q5", "Poor appetite or overeating"),
    Question::new(
        "q6",
        "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
    ),
    Question::new(
        "q7",
        "Trouble concentrating on things, such as reading the newspaper or watching television",
    ),
    Question::new(
        "q8",
        "Moving or speaking so slowly that other people could have noticed, or the opposite: being so fidgety or restless that you have been moving around a lot more than usual",
    ),
    Question::new(
        "q9",
        "Thoughts that you would be better off dead, or of hurting yourself in some way",
    ),
];

pub static SEVERITY: BandTable<Tier> = BandTable::new(
    &[
        Band {
            upper: 4.0,
            value: Tier::advising(
                "None-Minimal",
                ColorTier::Green,
                "Watchful waiting; no treatment indicated.",
            ),
        },
        Band {
            upper: 9.0,
            value: Tier::advising(
                "Mild",
                ColorTier::Yellow,
                "Watchful waiting; repeat PHQ-9 at follow-up.",
            ),
        },
        Band {
            upper: 14.0,
            value: Tier::advising(
                "Moderate",
                ColorTier::Orange,
                "Treatment plan, considering counseling, follow-up and/or pharmacotherapy.",
            ),
        },
        Band {
            upper: 19.0,
            value: Tier::advising(
                "Moderately Severe",
                ColorTier::Red,
                "Active treatment with pharmacotherapy and/or psychotherapy.",
            ),
        },
    ],
    Tier::advising(
        "Severe",
        ColorTier::DarkRed,
        "Immediate initiation of pharmacotherapy and, if severe impairment or poor response \
         to therapy, expedited referral to a mental health specialist.",
    ),
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Phq9Result {
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Item 9 was answered above "not at all". Needs same-day follow-up
    /// whatever the total.
    pub self_harm_flag: bool,
}

pub fn calculate_phq9_score(answers: &AnswerSet<Likert>) -> Phq9Result {
    let unknown = answers.unknown_ids(&QUESTIONS);
    if !unknown.is_empty() {
        tracing::warn!(?unknown, "ignoring unrecognized PHQ-9 answers");
    }

    let score = scoring::sum_likert(answers, &QUESTIONS, |_| true);
    let self_harm_flag = answers
        .get(SELF_HARM_QUESTION)
        .is_some_and(|answer| answer.value() > 0);

    tracing::debug!(
        score,
        self_harm_flag,
        answered = answers.answered_count(&QUESTIONS),
        "PHQ-9 scored"
    );
    Phq9Result {
        result: scoring::classify(&SEVERITY, score),
        self_harm_flag,
    }
}

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn description(&self) -> &str {
        "Over the last 2 weeks, how often have you been bothered by any of the following problems?"
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }

    fn response_options(&self) -> &[ResponseOption] {
        &RESPONSES
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange { min: 0, max: 27 }
    }

    fn requires_complete(&self) -> bool {
        true
    }
}
