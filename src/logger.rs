use colored::*;
use env_logger::{Builder, Env};
use log::Level;
use std::io::Write;

/// Maps the number of `-v` flags to a default filter. `RUST_LOG` still wins.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_logger(verbosity: u8) {
    let env = Env::default().default_filter_or(default_filter(verbosity));
    Builder::from_env(env)
        .format(|buf, record| {
            let tag = match record.level() {
                Level::Error => "error".red().bold(),
                Level::Warn => "warn".yellow().bold(),
                Level::Info => "info".green(),
                Level::Debug => "debug".blue(),
                Level::Trace => "trace".dimmed(),
            };
            writeln!(buf, "[{}] {}", tag, record.args())
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_by_verbosity() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "info");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(7), "trace");
    }
}
