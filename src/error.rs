//! Error types raised by the copy engine.
//!
//! Every variant carries enough context to be shown to the user as-is. The
//! boundary (`handlers::copy`) wraps them in `anyhow` only to add context for
//! configuration failures.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyError {
    /// The source pattern expanded to nothing and `fail-no-match` is set.
    #[error("Glob '{pattern}' doesn't match any files")]
    NoMatch { pattern: String },

    /// A destination (or, in strict mode, a resolved target) escapes the working directory.
    #[error("'{}' is outside the working directory '{}', set 'allow-outside-working-directory' to copy there", .path.display(), .cwd.display())]
    OutsideWorkingDirectory { path: PathBuf, cwd: PathBuf },

    #[error("'{}' already exists, use 'force' to overwrite", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Path '{}' is a directory, set 'recursive' to copy", .0.display())]
    DirectoryNotRecursive(PathBuf),

    #[error("Cannot copy '{}' to '{}': {reason}", .entry.display(), .destination.display())]
    InvalidDestination {
        entry: PathBuf,
        destination: PathBuf,
        reason: &'static str,
    },

    /// Preserve-path mode found no segment shared by the source and the destination.
    #[error("Cannot preserve the path of '{}': it shares no directory with '{}'", .entry.display(), .destination.display())]
    Resolution { entry: PathBuf, destination: PathBuf },

    #[error("Invalid glob '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Platform failure while touching the filesystem; keeps the native message.
    #[error("Failed to {action} '{}': {err}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        err: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CopyError>;

impl CopyError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, err: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_entry() {
        let err = CopyError::AlreadyExists(PathBuf::from("out/a.txt"));
        assert_eq!(
            err.to_string(),
            "'out/a.txt' already exists, use 'force' to overwrite"
        );

        let err = CopyError::NoMatch {
            pattern: "z.txt".to_string(),
        };
        assert_eq!(err.to_string(), "Glob 'z.txt' doesn't match any files");
    }

    #[test]
    fn test_io_keeps_native_message() {
        let native = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let err = CopyError::io("copy", "in/a.txt", native);
        assert!(err.to_string().ends_with("Permission denied"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
