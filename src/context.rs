use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Process state one copy invocation runs against.
///
/// `cwd` is both the base for relative patterns/destinations and the
/// containment root. `env` is a snapshot used for `INPUT_*` lookups, so the
/// engine never reads the live process environment.
#[derive(Debug, Clone)]
pub struct WorkContext {
    pub cwd: PathBuf,
    pub env: HashMap<String, String>,
}

impl WorkContext {
    pub fn from_process() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current working directory")?;
        let mut ctx = Self::with_cwd(cwd);
        ctx.env = std::env::vars().collect();
        Ok(ctx)
    }

    /// Context rooted at `cwd` with an empty environment.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            env: HashMap::new(),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
