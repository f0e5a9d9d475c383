use std::fs;
use std::path::Path;
use crate::error::{CopyError, Result};

/// Copies bytes and permission bits, replacing `dst` if it exists.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).map_err(|e| CopyError::io("copy", src, e))?;
    Ok(())
}

/// Creates every missing directory above `target`. Existing ones are fine.
pub fn ensure_parent_dirs(target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CopyError::io("create directory", parent, e))?;
        }
    }
    Ok(())
}

/// Merge-copies `src` into `dst`: directories are created as needed, files
/// are overwritten, anything already in `dst` that `src` lacks is kept.
///
/// `src` is listed before `dst` is created, so copying a directory into its
/// own subtree copies what was there once and stops.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    let entries = fs::read_dir(src)
        .and_then(|rd| rd.collect::<std::io::Result<Vec<_>>>())
        .map_err(|e| CopyError::io("read directory", src, e))?;

    if !dst.is_dir() {
        fs::create_dir_all(dst).map_err(|e| CopyError::io("create directory", dst, e))?;
    }

    for entry in entries {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        // Follows symlinks like a plain recursive copy would
        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            copy_file(&src_path, &dst_path)?;
        }
    }
    Ok(())
}
