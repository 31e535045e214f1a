//! medcalc-core
//!
//! Shared vocabulary of the clinical calculators: answer types, result
//! records, calculator inputs and outputs, and the banded scorer every
//! calculator classifies through. No calculation rules live here.

pub mod band;
pub mod error;
pub mod models;
