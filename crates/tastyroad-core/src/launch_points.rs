//! Configured launch points and the one-shot resume point

use crate::config::LaunchConfig;
use crate::host::url_host;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tastyroad_store::{KeyValueStore, KeyValueStoreExt};
use url::Url;

const PRIMARY_KEY: &str = "chickenfood.main";
const SECONDARY_KEY: &str = "chickenfood.privacy";
const RESUME_KEY: &str = "chickenfood.resume";
const MARKS_KEY: &str = "chickenfood.marks";

/// Opaque record kept for the content host; never interpreted here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mark(pub Map<String, Value>);

/// Primary and privacy locators plus the resume point.
///
/// Malformed locators never raise: they are dropped and the last good value
/// (or the compiled-in default at startup) is kept.
pub struct LaunchPoints {
    store: Arc<dyn KeyValueStore>,
    default_primary: Url,
    default_secondary: Url,
    primary: Url,
    secondary: Url,
    did_store_resume: bool,
}

impl LaunchPoints {
    pub fn load(store: Arc<dyn KeyValueStore>, config: &LaunchConfig) -> Self {
        let primary = stored_point(store.as_ref(), PRIMARY_KEY)
            .unwrap_or_else(|| config.default_primary.clone());
        let secondary = stored_point(store.as_ref(), SECONDARY_KEY)
            .unwrap_or_else(|| config.default_secondary.clone());

        Self {
            store,
            default_primary: config.default_primary.clone(),
            default_secondary: config.default_secondary.clone(),
            primary,
            secondary,
            did_store_resume: false,
        }
    }

    pub fn primary(&self) -> &Url {
        &self.primary
    }

    pub fn secondary(&self) -> &Url {
        &self.secondary
    }

    /// Host the content observer is compared against
    pub fn baseline_host(&self) -> Option<String> {
        url_host(&self.primary)
    }

    /// Where the content host opens: the resume point if one was kept
    pub fn start_point(&self) -> Url {
        self.restore_resume()
            .unwrap_or_else(|| self.primary.clone())
    }

    /// Returns whether the value was accepted
    pub fn update_primary(&mut self, value: &str) -> bool {
        let Some(point) = parse_point(value) else {
            tracing::debug!(value, "Ignoring malformed primary launch point");
            return false;
        };
        self.store.save(value.trim(), PRIMARY_KEY);
        self.primary = point;
        true
    }

    /// Returns whether the value was accepted
    pub fn update_secondary(&mut self, value: &str) -> bool {
        let Some(point) = parse_point(value) else {
            tracing::debug!(value, "Ignoring malformed secondary launch point");
            return false;
        };
        self.store.save(value.trim(), SECONDARY_KEY);
        self.secondary = point;
        true
    }

    /// Persist the resume point once per process, and never over a stored one
    pub fn store_resume_if_needed(&mut self, point: &Url) {
        if self.did_store_resume {
            return;
        }
        self.did_store_resume = true;

        if self.store.exists(RESUME_KEY) {
            return;
        }

        tracing::debug!(%point, "Storing resume point");
        self.store.save(point.as_str(), RESUME_KEY);
    }

    pub fn restore_resume(&self) -> Option<Url> {
        stored_point(self.store.as_ref(), RESUME_KEY)
    }

    pub fn save_marks(&self, items: &[Mark]) {
        self.store.save(items, MARKS_KEY);
    }

    pub fn load_marks(&self) -> Option<Vec<Mark>> {
        self.store.load(MARKS_KEY)
    }

    /// Clear every persisted launch key and the resume guard.
    ///
    /// In-memory points return to the configured defaults.
    pub fn reset_all(&mut self) {
        for key in [PRIMARY_KEY, SECONDARY_KEY, RESUME_KEY, MARKS_KEY] {
            self.store.remove(key);
        }
        self.primary = self.default_primary.clone();
        self.secondary = self.default_secondary.clone();
        self.did_store_resume = false;
    }
}

impl std::fmt::Debug for LaunchPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchPoints")
            .field("primary", &self.primary.as_str())
            .field("secondary", &self.secondary.as_str())
            .field("did_store_resume", &self.did_store_resume)
            .finish()
    }
}

fn parse_point(value: &str) -> Option<Url> {
    Url::parse(value.trim()).ok()
}

fn stored_point(store: &dyn KeyValueStore, key: &str) -> Option<Url> {
    let saved: String = store.load(key)?;
    parse_point(&saved)
}
