use medcalc_core::band::{Band, BandTable};
use medcalc_core::models::Subscale::{Anxiety as A, Depression as D, Stress as S};
use medcalc_core::models::{AnswerSet, ColorTier, Likert, Question, Subscale};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::scoring::{self, ResponseOption, ScoreRange, Tier};

/// DASS-21: Depression Anxiety Stress Scales, short form.
/// 21 items rated 0–3, seven per subscale. Subscale sums are doubled to
/// match the 42-item scale, so each subscale ranges 0–42.
pub struct Dass21;

/// Subscale sums are multiplied by this to reach full-scale scores.
pub const SCALE_FACTOR: i32 = 2;

pub static RESPONSES: [ResponseOption; 4] = [
    ResponseOption { value: 0, label: "Did not apply to me at all" },
    ResponseOption { value: 1, label: "Applied to me to some degree, or some of the time" },
    ResponseOption { value: 2, label: "Applied to me to a considerable degree, or a good part of time" },
    ResponseOption { value: 3, label: "Applied to me very much, or most of the time" },
];

pub static QUESTIONS: [Question; 21] = [
    Question::tagged("q1", "I found it hard to wind down", S),
    Question::tagged("q2", "I was aware of dryness of my mouth", A),
    Question::tagged("q3", "I couldn't seem to experience any positive feeling at all", D),
    Question::tagged(
        "q4",
        "I experienced breathing difficulty (e.g. excessively rapid breathing, breathlessness in the absence of physical exertion)",
        A,
    ),
    Question::tagged("q5", "I found it difficult to work up the initiative to do things", D),
    Question::tagged("q6", "I tended to over-react to situations", S),
    Question::tagged("q7", "I experienced trembling (e.g. in the hands)", A),
    Question::tagged("q8", "I felt that I was using a lot of nervous energy", S),
    Question::tagged(
        "q9",
        "I was worried about situations in which I might panic and make a fool of myself",
        A,
    ),
    Question::tagged("q10", "I felt that I had nothing to look forward to", D),
    Question::tagged("q11", "I found myself getting agitated", S),
    Question::tagged("q12", "I found it difficult to relax", S),
    Question::tagged("q13", "I felt down-hearted and blue", D),
    Question::tagged(
        "q14",
        "I was intolerant of anything that kept me from getting on with what I was doing",
        S,
    ),
    Question::tagged("q15", "I felt I was close to panic", A),
    Question::tagged("q16", "I was unable to become enthusiastic about anything", D),
    Question::tagged("q17", "I felt I wasn't worth much as a person", D),
    Question::tagged("q18", "I felt that I was rather touchy", S),
    Question::tagged(
        "q19",
        "I was aware of the action of my heart in the absence of physical exertion (e.g. sense of heart rate increase, heart missing a beat)",
        A,
    ),
    Question::tagged("q20", "I felt scared without any good reason", A),
    Question::tagged("q21", "I felt that life was meaningless", D),
];

const fn severity_bands(
    normal: f64,
    mild: f64,
    moderate: f64,
    severe: f64,
) -> [Band<Tier>; 4] {
    [
        Band { upper: normal, value: Tier::new("Normal", ColorTier::Green) },
        Band { upper: mild, value: Tier::new("Mild", ColorTier::Yellow) },
        Band { upper: moderate, value: Tier::new("Moderate", ColorTier::Orange) },
        Band { upper: severe, value: Tier::new("Severe", ColorTier::Red) },
    ]
}

const EXTREMELY_SEVERE: Tier = Tier::new("Extremely Severe", ColorTier::DarkRed);

static DEPRESSION_BANDS: [Band<Tier>; 4] = severity_bands(9.0, 13.0, 20.0, 27.0);
static ANXIETY_BANDS: [Band<Tier>; 4] = severity_bands(7.0, 9.0, 14.0, 19.0);
static STRESS_BANDS: [Band<Tier>; 4] = severity_bands(14.0, 18.0, 25.0, 33.0);

pub static DEPRESSION_SEVERITY: BandTable<Tier> =
    BandTable::new(&DEPRESSION_BANDS, EXTREMELY_SEVERE);
pub static ANXIETY_SEVERITY: BandTable<Tier> = BandTable::new(&ANXIETY_BANDS, EXTREMELY_SEVERE);
pub static STRESS_SEVERITY: BandTable<Tier> = BandTable::new(&STRESS_BANDS, EXTREMELY_SEVERE);

pub fn severity_table(subscale: Subscale) -> &'static BandTable<Tier> {
    match subscale {
        Subscale::Depression => &DEPRESSION_SEVERITY,
        Subscale::Anxiety => &ANXIETY_SEVERITY,
        Subscale::Stress => &STRESS_SEVERITY,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleScore {
    pub subscale: Subscale,
    pub score: i32,
    pub severity: String,
    pub color: ColorTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DassResult {
    pub depression: SubscaleScore,
    pub anxiety: SubscaleScore,
    pub stress: SubscaleScore,
}

impl DassResult {
    pub fn subscale(&self, subscale: Subscale) -> &SubscaleScore {
        match subscale {
            Subscale::Depression => &self.depression,
            Subscale::Anxiety => &self.anxiety,
            Subscale::Stress => &self.stress,
        }
    }
}

/// Score one subscale. Unanswered items contribute nothing, so a partial
/// form scores low; callers gate display on completeness.
pub fn score_subscale(answers: &AnswerSet<Likert>, subscale: Subscale) -> SubscaleScore {
    let raw = scoring::sum_likert(answers, &QUESTIONS, |q| q.subscale == Some(subscale));
    let score = raw * SCALE_FACTOR;
    let tier = severity_table(subscale).classify(f64::from(score));
    SubscaleScore {
        subscale,
        score,
        severity: tier.label.to_string(),
        color: tier.color,
    }
}

pub fn calculate_dass_score(answers: &AnswerSet<Likert>) -> DassResult {
    let unknown = answers.unknown_ids(&QUESTIONS);
    if !unknown.is_empty() {
        tracing::warn!(?unknown, "ignoring unrecognized DASS-21 answers");
    }

    let result = DassResult {
        depression: score_subscale(answers, Subscale::Depression),
        anxiety: score_subscale(answers, Subscale::Anxiety),
        stress: score_subscale(answers, Subscale::Stress),
    };
    tracing::debug!(
        depression = result.depression.score,
        anxiety = result.anxiety.score,
        stress = result.stress.score,
        answered = answers.answered_count(&QUESTIONS),
        "DASS-21 scored"
    );
    result
}

impl Instrument for Dass21 {
    fn id(&self) -> &str {
        "dass21"
    }

    fn name(&self) -> &str {
        "DASS-21"
    }

    fn description(&self) -> &str {
        "Depression, Anxiety and Stress Scale. Rate how much each statement applied \
         to you over the past week."
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }

    fn response_options(&self) -> &[ResponseOption] {
        &RESPONSES
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange { min: 0, max: 42 }
    }

    fn requires_complete(&self) -> bool {
        true
    }
}
