//! Path resolution for the local data directory

use crate::error::StoreError;
use std::path::{Path, PathBuf};

/// Environment override for the data directory
pub const HOME_ENV: &str = "TASTYROAD_HOME";

/// Resolves standard paths for persisted state
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// Resolve the data directory from `TASTYROAD_HOME`, falling back to `~/.tastyroad`
    pub fn new() -> Result<Self, StoreError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(root));
        }

        let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        Ok(Self::with_root(home.join(".tastyroad")))
    }

    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the key-value store file path
    pub fn store_file(&self) -> PathBuf {
        self.root.join("store.json")
    }

    /// Get the optional launch configuration path
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }
}
