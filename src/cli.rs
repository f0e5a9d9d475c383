use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Boolean inputs take an optional value so they can also switch a setting
/// off explicitly (`--force=false`) over the environment or config file.
#[derive(Parser, Debug, Default)]
#[command(
    name = "prepare-copy",
    version,
    about = "Copy files and directories matched by a glob pattern"
)]
pub struct Cli {
    /// Glob pattern (or literal path) of what to copy
    pub source: Option<String>,

    /// Target file or directory
    pub destination: Option<String>,

    /// Copy matched directories with their whole content
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub recursive: Option<bool>,

    /// Overwrite files that already exist at the target
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub force: Option<bool>,

    /// Allow the destination to be outside the working directory
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub allow_outside_working_directory: Option<bool>,

    /// Fail instead of warning when the pattern matches nothing
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub fail_no_match: Option<bool>,

    /// Recreate the source's directory structure below the destination
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub preserve_path: Option<bool>,

    /// Check every resolved target against the working directory, not only the destination
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub strict_containment: Option<bool>,

    /// Print what would be copied without touching the filesystem
    #[arg(short = 'd', long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub dry_run: Option<bool>,

    /// TOML file with default inputs (defaults to ./copy.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positionals_and_flags() {
        let cli = Cli::try_parse_from(["prepare-copy", "in/*", "out", "-r", "--force=false"]).unwrap();
        assert_eq!(cli.source.as_deref(), Some("in/*"));
        assert_eq!(cli.destination.as_deref(), Some("out"));
        assert_eq!(cli.recursive, Some(true));
        assert_eq!(cli.force, Some(false));
        assert_eq!(cli.preserve_path, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_long_names_and_verbosity() {
        let cli = Cli::try_parse_from([
            "prepare-copy",
            "--allow-outside-working-directory",
            "--fail-no-match",
            "--preserve-path",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.source, None);
        assert_eq!(cli.allow_outside_working_directory, Some(true));
        assert_eq!(cli.fail_no_match, Some(true));
        assert_eq!(cli.preserve_path, Some(true));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
