// Result reporting: where outputs, failures and diagnostics go

use anyhow::{Context, Result};
use colored::*;
use log::{debug, warn};
use std::io::Write;

pub trait Reporter {
    fn debug(&self, message: &str);
    fn warning(&self, message: &str);
    /// Publishes a named output. Called at most once per invocation.
    fn set_output(&self, name: &str, values: &[String]) -> Result<()>;
    fn set_failed(&self, message: &str);
}

/// Writes outputs to stdout as `name=<json>` lines and everything else through `log`.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn debug(&self, message: &str) {
        debug!("{}", message);
    }

    fn warning(&self, message: &str) {
        warn!("{} {}", "⚠️".yellow(), message);
    }

    fn set_output(&self, name: &str, values: &[String]) -> Result<()> {
        let line = format_output(name, values)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line).context("Failed to write output")?;
        Ok(())
    }

    fn set_failed(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message.red());
    }
}

pub fn format_output(name: &str, values: &[String]) -> Result<String> {
    let json = serde_json::to_string(values).context("Failed to serialize output")?;
    Ok(format!("{}={}", name, json))
}
