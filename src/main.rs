mod cli;
mod config;
mod context;
mod error;
mod handlers;
mod logger;
mod reporter;
mod runner;
mod utils;

use clap::Parser;
use cli::Cli;
use handlers::copy::{handle_copy_entry, report_outcome};
use reporter::ConsoleReporter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let reporter = ConsoleReporter;
    if report_outcome(handle_copy_entry(&cli, &reporter), &reporter) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
