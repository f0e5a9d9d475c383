use anyhow::{Context, Result, bail};
use colored::*;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use crate::cli::Cli;
use crate::context::WorkContext;
use crate::utils::clean_path;

pub const DEFAULT_CONFIG_FILE: &str = "copy.toml";

/// Inputs read from a TOML file. Keys use the same kebab-case names as the
/// `INPUT_*` variables and the command-line options.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub recursive: Option<bool>,
    pub force: Option<bool>,
    pub allow_outside_working_directory: Option<bool>,
    pub fail_no_match: Option<bool>,
    pub preserve_path: Option<bool>,
    pub strict_containment: Option<bool>,
    pub dry_run: Option<bool>,
}

/// One fully resolved copy invocation. Built once at the boundary and never
/// mutated by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyRequest {
    pub source_pattern: String,
    pub destination: PathBuf,
    pub recursive: bool,
    pub force: bool,
    pub allow_outside_working_directory: bool,
    pub fail_on_no_match: bool,
    pub preserve_path: bool,
    pub strict_containment: bool,
    pub dry_run: bool,
}

impl CopyRequest {
    /// Request with every flag off.
    pub fn new(source_pattern: impl Into<String>, destination: impl AsRef<Path>) -> Self {
        Self {
            source_pattern: source_pattern.into(),
            destination: clean_path(destination.as_ref()),
            recursive: false,
            force: false,
            allow_outside_working_directory: false,
            fail_on_no_match: false,
            preserve_path: false,
            strict_containment: false,
            dry_run: false,
        }
    }

    /// Layers the inputs: command line, then `INPUT_*` variables, then the
    /// config file, then defaults.
    pub fn resolve(cli: &Cli, file: &FileConfig, ctx: &WorkContext) -> Result<Self> {
        let source = pick_string("source", cli.source.as_ref(), file.source.as_ref(), ctx)?;
        let destination = pick_string(
            "destination",
            cli.destination.as_ref(),
            file.destination.as_ref(),
            ctx,
        )?;

        let mut request = Self::new(source, destination);
        request.recursive = pick_bool("recursive", cli.recursive, file.recursive, ctx)?;
        request.force = pick_bool("force", cli.force, file.force, ctx)?;
        request.allow_outside_working_directory = pick_bool(
            "allow-outside-working-directory",
            cli.allow_outside_working_directory,
            file.allow_outside_working_directory,
            ctx,
        )?;
        request.fail_on_no_match =
            pick_bool("fail-no-match", cli.fail_no_match, file.fail_no_match, ctx)?;
        request.preserve_path =
            pick_bool("preserve-path", cli.preserve_path, file.preserve_path, ctx)?;
        request.strict_containment = pick_bool(
            "strict-containment",
            cli.strict_containment,
            file.strict_containment,
            ctx,
        )?;
        request.dry_run = pick_bool("dry-run", cli.dry_run, file.dry_run, ctx)?;
        Ok(request)
    }
}

/// `allow-outside-working-directory` -> `INPUT_ALLOW_OUTSIDE_WORKING_DIRECTORY`
pub fn input_env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace('-', "_").to_uppercase())
}

fn env_input<'a>(name: &str, ctx: &'a WorkContext) -> Option<&'a str> {
    ctx.env
        .get(&input_env_key(name))
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn pick_string(
    name: &str,
    cli: Option<&String>,
    file: Option<&String>,
    ctx: &WorkContext,
) -> Result<String> {
    let value = cli
        .map(|s| s.as_str())
        .or_else(|| env_input(name, ctx))
        .or(file.map(|s| s.as_str()))
        .filter(|v| !v.is_empty());

    match value {
        Some(v) => Ok(v.to_string()),
        None => bail!(
            "Input required and not supplied: '{}' (argument, {} or config file)",
            name,
            input_env_key(name)
        ),
    }
}

fn pick_bool(name: &str, cli: Option<bool>, file: Option<bool>, ctx: &WorkContext) -> Result<bool> {
    if let Some(v) = cli {
        return Ok(v);
    }
    if let Some(raw) = env_input(name, ctx) {
        return parse_bool(raw)
            .with_context(|| format!("Invalid value for {}", input_env_key(name)));
    }
    Ok(file.unwrap_or(false))
}

pub fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("'{}' is not a boolean (use true/false)", other),
    }
}

/// Reads the explicit config file, or `copy.toml` in `dir` when it exists.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<FileConfig> {
    let config_path = match explicit {
        Some(p) => {
            let p = if p.is_absolute() { p.to_path_buf() } else { dir.join(p) };
            if !p.exists() {
                bail!("Config file not found: {}", p.display());
            }
            p
        }
        None => {
            let p = dir.join(DEFAULT_CONFIG_FILE);
            if !p.exists() {
                return Ok(FileConfig::default());
            }
            p
        }
    };

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    info!("{} Loaded inputs from: {}", "📄".cyan(), config_path.display());
    Ok(config)
}

/// Overlays `.env` (or `.env.<COPY_ENV>`) from `dir` onto the context's
/// environment snapshot. Variables already set in the process win.
pub fn load_env_file(ctx: &mut WorkContext, dir: &Path) -> Result<()> {
    let env_filename = ctx
        .env
        .get("COPY_ENV")
        .map(|v| format!(".env.{}", v))
        .unwrap_or_else(|| ".env".to_string());

    let env_path = dir.join(&env_filename);
    if !env_path.exists() {
        return Ok(());
    }

    info!("{} Loading inputs from: {}", "🌿".green(), env_filename.bold());
    let items = dotenvy::from_path_iter(&env_path)
        .with_context(|| format!("Failed to read {}", env_path.display()))?;
    for item in items {
        let (key, val) = item.with_context(|| format!("Failed to parse {}", env_path.display()))?;
        ctx.env.entry(key).or_insert(val);
    }
    Ok(())
}
