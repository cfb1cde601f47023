//! Core types for launch routing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level screen the user currently sees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    #[default]
    Loading,
    Consent,
    Main,
}

/// Sub-route inside the main stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MainRoute {
    #[default]
    Menu,
    Templates,
    MealLog,
    Settings,
}

/// Routing decision derived from a content-host event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Decision {
    /// Content still sits on the baseline host: the consent gate applies
    Consent,
    /// Content has diverged from the baseline: do not force the gate
    Main,
}

impl Decision {
    /// Same host as the baseline means the first-run gate is still relevant
    pub fn from_hosts(event_host: &str, baseline_host: &str) -> Self {
        if event_host == baseline_host {
            Decision::Consent
        } else {
            Decision::Main
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Loading => "loading",
            Stage::Consent => "consent",
            Stage::Main => "main",
        };
        f.write_str(name)
    }
}

impl fmt::Display for MainRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MainRoute::Menu => "menu",
            MainRoute::Templates => "templates",
            MainRoute::MealLog => "mealLog",
            MainRoute::Settings => "settings",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Decision::Consent => "consent",
            Decision::Main => "main",
        };
        f.write_str(name)
    }
}
