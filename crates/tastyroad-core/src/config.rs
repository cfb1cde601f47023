//! Configuration for the launch sequence

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_PRIMARY: &str = "https://colehockerapps.github.io/foodreceipts";
pub const DEFAULT_SECONDARY: &str =
    "https://www.freeprivacypolicy.com/live/dcd3a139-8fff-459c-8899-e254e3080528";
pub const DEFAULT_DWELL_SECS: f64 = 4.0;

fn compiled_default(value: &str) -> Url {
    Url::parse(value).expect("compiled-in launch point must parse")
}

fn default_primary() -> Url {
    compiled_default(DEFAULT_PRIMARY)
}

fn default_secondary() -> Url {
    compiled_default(DEFAULT_SECONDARY)
}

fn default_dwell_secs() -> f64 {
    DEFAULT_DWELL_SECS
}

/// Launch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Minimum splash dwell before any routing decision commits
    #[serde(default = "default_dwell_secs")]
    pub dwell_secs: f64,

    /// Primary launch point used when nothing valid is persisted
    #[serde(default = "default_primary")]
    pub default_primary: Url,

    /// Privacy launch point used when nothing valid is persisted
    #[serde(default = "default_secondary")]
    pub default_secondary: Url,
}

impl LaunchConfig {
    pub fn new() -> Self {
        Self {
            dwell_secs: DEFAULT_DWELL_SECS,
            default_primary: default_primary(),
            default_secondary: default_secondary(),
        }
    }

    /// Load from a JSON file, falling back to defaults when absent or unreadable
    pub fn load(path: &Path) -> Self {
        match tastyroad_store::read_json::<LaunchConfig>(path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::new(),
            Err(err) => {
                tracing::warn!("Failed to load launch config at {:?}: {}", path, err);
                Self::new()
            }
        }
    }

    /// Dwell as a duration; values that do not fit a duration use the default
    pub fn dwell(&self) -> Duration {
        Duration::try_from_secs_f64(self.dwell_secs).unwrap_or_else(|err| {
            tracing::warn!(dwell_secs = self.dwell_secs, "Ignoring configured dwell: {}", err);
            Duration::from_secs_f64(DEFAULT_DWELL_SECS)
        })
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self::new()
    }
}
