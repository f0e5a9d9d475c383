// Glob expansion against the working directory

use glob::{MatchOptions, Pattern, glob_with};
use log::debug;
use std::path::{Path, PathBuf};
use crate::context::WorkContext;
use crate::error::{CopyError, Result};
use crate::utils::{absolutize, is_within};

/// Expands `pattern` into the matching paths, in glob enumeration order
/// (entries of each directory are visited alphabetically). `*` and `**`
/// never match names starting with `.`.
///
/// Relative patterns are matched below `ctx.cwd` and their matches are returned
/// relative to it, so they read the same as the pattern. Unless `allow_outside`
/// is set, matches that land outside the working directory are dropped.
pub fn get_matching_files(
    pattern: &str,
    ctx: &WorkContext,
    allow_outside: bool,
) -> Result<Vec<PathBuf>> {
    let is_relative = !Path::new(pattern).is_absolute();
    let full_pattern = if is_relative {
        let base = Pattern::escape(&ctx.cwd.to_string_lossy());
        Path::new(&base).join(pattern).to_string_lossy().into_owned()
    } else {
        pattern.to_string()
    };

    // Wildcards skip dot-files; a pattern has to name them explicitly
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let entries = glob_with(&full_pattern, options).map_err(|e| {
        CopyError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.msg.to_string(),
        }
    })?;

    let root = absolutize(&ctx.cwd, Path::new("."));
    let mut matched = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            CopyError::io("read", path, e.into())
        })?;

        if !allow_outside && !is_within(&absolutize(&ctx.cwd, &path), &root) {
            debug!("Skipping '{}': outside the working directory", path.display());
            continue;
        }

        let shown = if is_relative {
            path.strip_prefix(&ctx.cwd).map(Path::to_path_buf).unwrap_or(path)
        } else {
            path
        };
        matched.push(shown);
    }
    Ok(matched)
}
