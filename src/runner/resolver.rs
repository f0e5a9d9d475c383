//! Destination placement for matched entries.
//!
//! Files land either at the destination itself (rename-on-copy), at
//! `destination/<basename>`, or, in preserve-path mode, at
//! `destination/<suffix>` where the suffix is the part of the source path
//! below the deepest directory name the two paths share.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use crate::context::WorkContext;
use crate::error::{CopyError, Result};
use crate::utils::{absolutize, segments};

/// Target for a file entry. `dest_is_dir` is the caller's check of the
/// destination so it is taken once per entry.
pub fn resolve_file_target(
    entry: &Path,
    destination: &Path,
    dest_is_dir: bool,
    preserve_path: bool,
    ctx: &WorkContext,
) -> Result<PathBuf> {
    if !dest_is_dir {
        return Ok(destination.to_path_buf());
    }

    if preserve_path {
        let suffix = preserved_suffix(entry, destination, ctx)?;
        if !suffix.as_os_str().is_empty() {
            return Ok(destination.join(suffix));
        }
    }

    let name = entry.file_name().ok_or_else(|| CopyError::InvalidDestination {
        entry: entry.to_path_buf(),
        destination: destination.to_path_buf(),
        reason: "the source has no file name",
    })?;
    Ok(destination.join(name))
}

/// Target for a directory entry: always `destination/<last segment>`.
pub fn resolve_dir_target(entry: &Path, destination: &Path, ctx: &WorkContext) -> PathBuf {
    match entry.file_name() {
        Some(name) => destination.join(name),
        // `.` or `..`: name the copy after the directory they point to
        None => match absolutize(&ctx.cwd, entry).file_name() {
            Some(name) => destination.join(name),
            None => destination.join(entry),
        },
    }
}

/// Part of `entry` that sits below the deepest directory name it shares with
/// `destination`.
///
/// Destination segments are scanned from the end; the first one that also
/// names a source segment anchors the split. When a name repeats in the
/// source, its last occurrence is used. An empty result means the anchor was
/// the file name itself.
pub fn preserved_suffix(entry: &Path, destination: &Path, ctx: &WorkContext) -> Result<PathBuf> {
    let src_segments = segments(&absolutize(&ctx.cwd, entry));
    let dst_segments = segments(&absolutize(&ctx.cwd, destination));

    let index_of: HashMap<&OsString, usize> = src_segments
        .iter()
        .enumerate()
        .map(|(i, seg)| (seg, i))
        .collect();

    let end = dst_segments
        .iter()
        .rev()
        .find_map(|seg| index_of.get(seg).map(|i| i + 1))
        .ok_or_else(|| CopyError::Resolution {
            entry: entry.to_path_buf(),
            destination: destination.to_path_buf(),
        })?;

    Ok(src_segments[end..].iter().collect())
}
