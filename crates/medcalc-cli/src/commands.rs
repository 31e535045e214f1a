use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;
use medcalc_calculators::error::CalculatorError;
use medcalc_calculators::{neonate, parse, validate};
use medcalc_core::models::{
    AnswerSet, Gender, HeightWeightInputs, PregnancyInputs, WeightLossInputs, WeightUnit, YesNo,
};
use medcalc_instruments::error::InstrumentError;
use medcalc_instruments::instruments::centor::{AgeBand, CentorAnswers, calculate_centor_score};
use medcalc_instruments::instruments::dass21::{self, Dass21, calculate_dass_score};
use medcalc_instruments::instruments::phq9::{self, Phq9, calculate_phq9_score};
use medcalc_instruments::instruments::stop_bang::{StopBang, calculate_stop_bang_score};
use medcalc_instruments::{all_instruments, check_answers, get_instrument};
use thiserror::Error;

use crate::config::{MedcalcConfig, OutputFormat};
use crate::report::{InstrumentSummary, Report};

#[derive(Parser, Debug)]
#[command(name = "medcalc")]
#[command(version)]
#[command(about = "Clinical calculators and screening instruments", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (defaults to the configured format)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to $MEDCALC_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available instruments
    List,

    /// Show an instrument's questions
    Show {
        /// Instrument id, e.g. phq9
        id: String,
    },

    /// Gestational age and estimated due date
    Pregnancy {
        /// First day of the last menstrual period (YYYY-MM-DD)
        #[arg(long)]
        lmp: Option<String>,

        /// Ultrasound date (YYYY-MM-DD)
        #[arg(long)]
        ultrasound: Option<String>,

        /// Gestational weeks measured at the ultrasound
        #[arg(long)]
        ga_weeks: Option<String>,

        /// Additional gestational days measured at the ultrasound (0-6)
        #[arg(long)]
        ga_days: Option<String>,

        /// Date to calculate for (defaults to today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Neonatal weight loss since birth
    Neonate {
        #[arg(long)]
        birth: String,

        #[arg(long)]
        current: String,

        /// g, kg or lb (defaults to the configured unit)
        #[arg(long)]
        unit: Option<String>,

        /// Age in hours
        #[arg(long)]
        age_hours: Option<String>,
    },

    /// Ideal and adjusted body weight (Devine)
    BodyWeight {
        /// Height in centimeters
        #[arg(long)]
        height: String,

        /// male or female
        #[arg(long)]
        gender: String,

        /// Actual body weight in kilograms
        #[arg(long)]
        weight: Option<String>,
    },

    /// Modified Centor score
    Centor {
        /// Tonsillar exudate or swelling
        #[arg(long)]
        exudate: bool,

        /// Tender or swollen anterior cervical nodes
        #[arg(long)]
        nodes: bool,

        /// Temperature above 38°C
        #[arg(long)]
        fever: bool,

        /// Cough absent
        #[arg(long)]
        no_cough: bool,

        /// under15, 15to44 or over44
        #[arg(long, default_value = "15to44")]
        age: String,
    },

    /// DASS-21 depression, anxiety and stress
    Dass21 {
        /// 21 comma-separated answers (0-3, '-' for unanswered)
        #[arg(long)]
        answers: String,
    },

    /// PHQ-9 depression severity
    Phq9 {
        /// 9 comma-separated answers (0-3, '-' for unanswered)
        #[arg(long)]
        answers: String,
    },

    /// STOP-BANG sleep apnea risk
    StopBang {
        /// Question ids answered yes, e.g. snoring,bmi,gender
        #[arg(long, value_delimiter = ',')]
        yes: Vec<String>,
    },
}

/// Problems with what the user typed. Printed as-is, not as a crash report.
#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}

pub fn execute(
    command: &Command,
    config: &MedcalcConfig,
    today: Date,
) -> Result<Report, InputError> {
    let report = match command {
        Command::List => Report::Instruments(
            all_instruments()
                .iter()
                .map(|i| InstrumentSummary {
                    id: i.id().to_string(),
                    name: i.name().to_string(),
                })
                .collect(),
        ),

        Command::Show { id } => {
            let instrument = get_instrument(id)
                .ok_or_else(|| InstrumentError::UnknownInstrument(id.clone()))?;
            Report::Catalog(instrument.to_structured_text())
        }

        Command::Pregnancy {
            lmp,
            ultrasound,
            ga_weeks,
            ga_days,
            today: as_of,
        } => {
            let today = match as_of {
                Some(text) => parse::parse_date("today", text)?,
                None => today,
            };
            let inputs = PregnancyInputs {
                lmp_date: lmp.as_deref().map(|t| parse::parse_date("lmp", t)).transpose()?,
                ultrasound_date: ultrasound
                    .as_deref()
                    .map(|t| parse::parse_date("ultrasound", t))
                    .transpose()?,
                ga_weeks_at_ultrasound: ga_weeks
                    .as_deref()
                    .map(|t| parse::parse_whole_number("ga_weeks", t))
                    .transpose()?,
                ga_days_at_ultrasound: ga_days
                    .as_deref()
                    .map(|t| parse::parse_whole_number("ga_days", t))
                    .transpose()?,
            };
            validate::ensure(validate::validate_pregnancy(&inputs, today))?;

            // Validation guarantees an LMP; None here means the dates fell
            // outside the supported calendar range.
            let info = medcalc_calculators::calculate_pregnancy_info(&inputs, today).ok_or_else(
                || {
                    CalculatorError::Validation(vec![validate::ValidationIssue {
                        field: "lmp_date".to_string(),
                        message: "Dates are outside the supported calendar range.".to_string(),
                    }])
                },
            )?;
            Report::Pregnancy(info)
        }

        Command::Neonate {
            birth,
            current,
            unit,
            age_hours,
        } => {
            let unit = match unit {
                Some(text) => text.parse::<WeightUnit>().map_err(CalculatorError::from)?,
                None => config.default_unit,
            };
            let inputs = WeightLossInputs {
                birth_weight: parse::parse_number("birth", birth)?,
                current_weight: parse::parse_number("current", current)?,
                unit,
                age_hours: match age_hours {
                    Some(text) => parse::parse_optional_number("age_hours", text)?,
                    None => None,
                },
            };
            validate::ensure(validate::validate_weight_loss(&inputs))?;
            Report::Neonate(neonate::from_inputs(&inputs))
        }

        Command::BodyWeight {
            height,
            gender,
            weight,
        } => {
            let inputs = HeightWeightInputs {
                gender: gender.parse::<Gender>().map_err(CalculatorError::from)?,
                height_cm: parse::parse_number("height", height)?,
                actual_weight_kg: match weight {
                    Some(text) => parse::parse_optional_number("weight", text)?,
                    None => None,
                },
            };
            validate::ensure(validate::validate_body_weight(&inputs))?;
            Report::BodyWeight(medcalc_calculators::calculate_body_weight(&inputs))
        }

        Command::Centor {
            exudate,
            nodes,
            fever,
            no_cough,
            age,
        } => {
            let answers = CentorAnswers {
                tonsillar_exudate: *exudate,
                swollen_tender_nodes: *nodes,
                fever_over_38: *fever,
                cough_absent: *no_cough,
                age_band: age.parse::<AgeBand>().map_err(InstrumentError::from)?,
            };
            Report::Score {
                instrument: "Centor".to_string(),
                result: calculate_centor_score(&answers),
            }
        }

        Command::Dass21 { answers } => {
            let answers = parse::parse_likert_answers(answers, &dass21::QUESTIONS)?;
            check_answers(&Dass21, &answers)?;
            Report::Dass(calculate_dass_score(&answers))
        }

        Command::Phq9 { answers } => {
            let answers = parse::parse_likert_answers(answers, &phq9::QUESTIONS)?;
            check_answers(&Phq9, &answers)?;
            Report::Phq9(calculate_phq9_score(&answers))
        }

        Command::StopBang { yes } => {
            let answers: AnswerSet<YesNo> = yes
                .iter()
                .map(|id| (id.trim().to_string(), YesNo::Yes))
                .collect();
            check_answers(&StopBang, &answers)?;
            Report::Score {
                instrument: "STOP-BANG".to_string(),
                result: calculate_stop_bang_score(&answers),
            }
        }
    };

    tracing::debug!(command = ?command, "command executed");
    Ok(report)
}

