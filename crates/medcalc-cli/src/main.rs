use std::process::ExitCode;

use clap::Parser;
use eyre::Result;

use medcalc_cli::commands::{Cli, execute};
use medcalc_cli::config::load_config;
use medcalc_cli::init_logging;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.log_json);

    let config = load_config(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output);
    let today = jiff::Zoned::now().date();

    match execute(&cli.command, &config, today) {
        Ok(report) => {
            println!("{}", report.render(format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "rejected input");
            eprintln!("error: {e}");
            Ok(ExitCode::from(2))
        }
    }
}
