pub mod common;
pub mod guard;
pub mod matcher;
pub mod resolver;


use colored::*;
use log::info;
use std::path::{Path, PathBuf};
use crate::config::CopyRequest;
use crate::context::WorkContext;
use crate::error::{CopyError, Result};
use crate::reporter::Reporter;
use crate::utils::{absolutize, display};

/// Destination paths produced by one invocation, in match order. A copied
/// directory contributes only its root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyResult {
    copied: Vec<String>,
}

impl CopyResult {
    pub fn paths(&self) -> &[String] {
        &self.copied
    }

    pub fn is_empty(&self) -> bool {
        self.copied.is_empty()
    }

    fn push(&mut self, path: &Path) {
        self.copied.push(display(path));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
}

/// Probed fresh for every entry; nothing is carried over from expansion.
fn classify(path: &Path) -> EntryKind {
    if path.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}

/// Runs one copy request to completion or to its first error.
///
/// Order of work: containment check on the destination, glob expansion,
/// then one pass over the matches. The first failing entry stops the run;
/// whatever was copied before it stays on disk.
pub fn execute(request: &CopyRequest, ctx: &WorkContext, reporter: &dyn Reporter) -> Result<CopyResult> {
    guard::assert_contained(&request.destination, ctx, request.allow_outside_working_directory)?;

    let pattern = &request.source_pattern;
    let files = matcher::get_matching_files(pattern, ctx, request.allow_outside_working_directory)?;
    if files.is_empty() {
        if request.fail_on_no_match {
            return Err(CopyError::NoMatch {
                pattern: pattern.clone(),
            });
        }
        reporter.warning(&format!("Glob '{}' doesn't match any files", pattern));
        return Ok(CopyResult::default());
    }
    let shown: Vec<String> = files.iter().map(|p| display(p)).collect();
    reporter.debug(&format!("Glob '{}', matched {:?}", pattern, shown));

    let mut result = CopyResult::default();
    for entry in &files {
        let target = match classify(&ctx.resolve(entry)) {
            EntryKind::File => copy_file_entry(entry, request, ctx)?,
            EntryKind::Directory => copy_dir_entry(entry, request, ctx)?,
        };
        result.push(&target);
    }

    reporter.debug(&format!("copied paths are: {:?}", result.paths()));
    Ok(result)
}

fn copy_file_entry(entry: &Path, request: &CopyRequest, ctx: &WorkContext) -> Result<PathBuf> {
    let dest_is_dir = ctx.resolve(&request.destination).is_dir();
    let target = resolver::resolve_file_target(
        entry,
        &request.destination,
        dest_is_dir,
        request.preserve_path,
        ctx,
    )?;
    check_target(&target, request, ctx)?;

    let src_abs = ctx.resolve(entry);
    let target_abs = ctx.resolve(&target);
    if target_abs.exists() && !request.force {
        return Err(CopyError::AlreadyExists(target));
    }
    if absolutize(&ctx.cwd, entry) == absolutize(&ctx.cwd, &target) {
        return Err(CopyError::InvalidDestination {
            entry: entry.to_path_buf(),
            destination: target,
            reason: "source and target are the same file",
        });
    }

    if request.dry_run {
        log_dry_run(entry, &target);
        return Ok(target);
    }
    if request.preserve_path {
        common::ensure_parent_dirs(&target_abs)?;
    }
    common::copy_file(&src_abs, &target_abs)?;
    info!("{} Copied {} -> {}", "📄".green(), entry.display(), target.display());
    Ok(target)
}

fn copy_dir_entry(entry: &Path, request: &CopyRequest, ctx: &WorkContext) -> Result<PathBuf> {
    if !request.recursive {
        return Err(CopyError::DirectoryNotRecursive(entry.to_path_buf()));
    }
    if !ctx.resolve(&request.destination).is_dir() {
        return Err(CopyError::InvalidDestination {
            entry: entry.to_path_buf(),
            destination: request.destination.clone(),
            reason: "the destination is not a directory",
        });
    }

    let target = resolver::resolve_dir_target(entry, &request.destination, ctx);
    check_target(&target, request, ctx)?;

    if request.dry_run {
        log_dry_run(entry, &target);
        return Ok(target);
    }
    common::copy_dir_recursive(&ctx.resolve(entry), &ctx.resolve(&target))?;
    info!("{} Copied {} -> {}", "📁".green(), entry.display(), target.display());
    Ok(target)
}

/// Per-target containment, only in strict mode.
fn check_target(target: &Path, request: &CopyRequest, ctx: &WorkContext) -> Result<()> {
    if request.strict_containment {
        guard::assert_resolved_contained(target, ctx, request.allow_outside_working_directory)?;
    }
    Ok(())
}

/// Planned copies go to the same `info` stream as real ones.
fn log_dry_run(entry: &Path, target: &Path) {
    info!("{} [DRY-RUN] Copy: {} -> {}", "::".yellow(), entry.display(), target.display());
}
