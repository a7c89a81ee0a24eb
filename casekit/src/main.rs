mod commands;
mod config;
mod error;
mod handlers;
mod output;

use clap::Parser;
use std::process::ExitCode;

use crate::commands::Cli;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::handlers::handle_command;
use crate::output::{init_logging, print_error};

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = CliConfig::resolve(cli.config.as_deref())?;
    config.json |= cli.json;
    handle_command(cli.command, &config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
