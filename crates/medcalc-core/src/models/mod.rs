pub mod answer;
pub mod body_weight;
pub mod neonate;
pub mod pregnancy;
pub mod score;

pub use answer::{AnswerSet, Likert, Question, Subscale, YesNo};
pub use body_weight::{BodyWeightResult, Gender, HeightWeightInputs};
pub use neonate::{
    AgeWindow, WeightLossInputs, WeightLossInterpretation, WeightLossResult, WeightLossSeverity,
    WeightUnit,
};
pub use pregnancy::{DatingMethod, GestationalAge, PregnancyInfo, PregnancyInputs, Trimester};
pub use score::{ColorTier, ScoreResult};
