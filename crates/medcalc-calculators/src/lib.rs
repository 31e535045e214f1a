//! medcalc-calculators
//!
//! Formula calculators: pregnancy dating, neonatal weight loss, and ideal /
//! adjusted body weight. Calculations are pure and never validate; the
//! [`validate`] and [`parse`] modules hold the checks a form runs before
//! calling in.

pub mod body_weight;
pub mod error;
pub mod neonate;
pub mod parse;
pub mod pregnancy;
pub mod validate;

pub use body_weight::{calculate_adj_bw, calculate_body_weight, calculate_ibw};
pub use neonate::calculate_neonate_weight_loss;
pub use pregnancy::{calculate_pregnancy_info, calculate_pregnancy_info_now};
