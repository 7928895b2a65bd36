use clap::Parser;
use std::process::ExitCode;

use anyhow::{Context, Result};

use datatool::cli::{self, Args, CliConfig};
use datatool::ConversionError;

fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging
    cli::init_logging(args.verbose, args.quiet);

    match try_main(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            match err.downcast_ref::<ConversionError>() {
                Some(conversion_error) => {
                    cli::handle_error(conversion_error);
                    ExitCode::from(conversion_error.exit_code())
                }
                None => ExitCode::FAILURE,
            }
        }
    }
}

fn try_main(args: Args) -> Result<ExitCode> {
    let command = args.command.name();
    let config = CliConfig::from_args(args).context("Invalid command-line options")?;
    tracing::debug!(config = ?config.conversion_config, "starting");
    cli::run(&config).with_context(|| format!("{} failed", command))
}
