use path_clean::PathClean;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Lexical cleanup of a user-supplied path: `.` components and trailing
/// separators go, inner `..` folds (`./out/` -> `out`, `out/../in` -> `in`).
/// An input made only of `.` collapses to `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    path.clean()
}

/// Joins `path` onto `base` when relative, then folds `.` and `..` lexically.
/// Symlinks are not resolved; the path does not need to exist.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    base.join(path).clean()
}

/// True when `path` equals `root` or is nested under it (both absolute and lexically clean).
pub fn is_within(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}

/// Named segments of an absolute path, without the root or drive prefix.
pub fn segments(path: &Path) -> Vec<OsString> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_os_string()),
            _ => None,
        })
        .collect()
}

pub fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
