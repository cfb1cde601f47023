//! Launch routing: consent gate, launch points and the launch decision engine

mod config;
mod engine;
mod host;
mod launch_points;
mod routing;
mod types;

pub use config::LaunchConfig;
pub use engine::{ArbiterStep, ContentEvent, LaunchArbiter, LaunchReport, LaunchSequence};
pub use host::host_of;
pub use launch_points::{LaunchPoints, Mark};
pub use routing::{RouteSnapshot, RoutingState, CONSENT_KEY};
pub use types::{Decision, MainRoute, Stage};
