use std::path::Path;
use crate::context::WorkContext;
use crate::error::{CopyError, Result};
use crate::utils::{absolutize, is_within};

/// Fails when `path` (made absolute against the working directory) is not the
/// working directory or something below it. A no-op when `allow_outside` is set.
///
/// The check is lexical: `..` is folded, symlinks are not followed.
pub fn assert_contained(path: &Path, ctx: &WorkContext, allow_outside: bool) -> Result<()> {
    if allow_outside {
        return Ok(());
    }

    let root = absolutize(&ctx.cwd, Path::new("."));
    let abs = absolutize(&ctx.cwd, path);
    if is_within(&abs, &root) {
        Ok(())
    } else {
        Err(CopyError::OutsideWorkingDirectory {
            path: path.to_path_buf(),
            cwd: root,
        })
    }
}

/// Stricter variant used per resolved target: the deepest existing ancestor
/// of `path` is canonicalized, so a symlinked directory that leads out of the
/// working directory is caught even though the path reads as nested.
pub fn assert_resolved_contained(path: &Path, ctx: &WorkContext, allow_outside: bool) -> Result<()> {
    if allow_outside {
        return Ok(());
    }

    let root = ctx
        .cwd
        .canonicalize()
        .map_err(|e| CopyError::io("resolve", &ctx.cwd, e))?;
    let abs = absolutize(&ctx.cwd, path);

    let mut real = abs.clone();
    for ancestor in abs.ancestors() {
        if let Ok(canonical) = ancestor.canonicalize() {
            if let Ok(tail) = abs.strip_prefix(ancestor) {
                real = canonical.join(tail);
            }
            break;
        }
    }

    if is_within(&real, &root) {
        Ok(())
    } else {
        Err(CopyError::OutsideWorkingDirectory {
            path: path.to_path_buf(),
            cwd: root,
        })
    }
}
