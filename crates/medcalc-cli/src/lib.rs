//! medcalc-cli
//!
//! Command-line front end for the calculators and instruments. Parses and
//! validates input with the caller-side checks, then renders results as text
//! or JSON.

pub mod commands;
pub mod config;
pub mod report;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so JSON output on
/// stdout stays parseable.
pub fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
