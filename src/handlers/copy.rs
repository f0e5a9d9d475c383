use anyhow::Result;
use colored::*;
use log::info;
use crate::cli::Cli;
use crate::config::{CopyRequest, load_config, load_env_file};
use crate::context::WorkContext;
use crate::reporter::Reporter;
use crate::runner::execute;

pub const OUTPUT_NAME: &str = "copied";

/// Entry point for one invocation: gathers inputs once, then runs them.
pub fn handle_copy_entry(cli: &Cli, reporter: &dyn Reporter) -> Result<()> {
    let mut ctx = WorkContext::from_process()?;
    let cwd = ctx.cwd.clone();

    load_env_file(&mut ctx, &cwd)?;
    let file_config = load_config(cli.config.as_deref(), &cwd)?;
    let request = CopyRequest::resolve(cli, &file_config, &ctx)?;

    run_request(&request, &ctx, reporter)
}

/// Executes `request` and publishes the `copied` output. On failure nothing is
/// published; the caller reports the error.
pub fn run_request(request: &CopyRequest, ctx: &WorkContext, reporter: &dyn Reporter) -> Result<()> {
    if request.dry_run {
        info!("{} Dry run: nothing will be written", "::".yellow());
    }

    let result = execute(request, ctx, reporter)?;
    if !result.is_empty() {
        info!(
            "{} Copied {} path(s) into {}",
            "✨".green(),
            result.paths().len(),
            request.destination.display().to_string().bold()
        );
    }
    reporter.set_output(OUTPUT_NAME, result.paths())
}

/// Hands a failed invocation to the reporter's failure channel, with the
/// whole context chain. Returns whether the invocation succeeded.
pub fn report_outcome(outcome: Result<()>, reporter: &dyn Reporter) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            reporter.set_failed(&format!("{:#}", e));
            false
        }
    }
}
