//! Launch decision engine
//!
//! Arbitrates between the splash dwell timer and the content-host event
//! stream, and commits at most one routing decision per launch. The two inputs
//! may arrive in either order; [`LaunchArbiter`] is built so that both orders
//! converge on the same outcome for the same final decision.

use crate::host::host_of;
use crate::launch_points::LaunchPoints;
use crate::routing::RoutingState;
use crate::types::{Decision, MainRoute, Stage};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;

/// One change of the content host's active reference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentEvent {
    pub locator: Option<String>,
}

impl ContentEvent {
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: Some(locator.into()),
        }
    }

    pub fn empty() -> Self {
        Self { locator: None }
    }
}

/// What a single input did to the arbiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArbiterStep {
    /// No usable host on one side, or nothing to do
    Ignored,
    /// Held until the dwell timer fires, replacing any earlier pending decision
    Buffered(Decision),
    /// Committed; the arbiter is now spent
    Applied(Decision),
    /// Arrived after a decision was applied or after the stage left `loading`
    Suppressed(Decision),
}

/// Single-owner decision state for one launch
#[derive(Debug, Clone)]
pub struct LaunchArbiter {
    baseline_host: Option<String>,
    min_dwell_passed: bool,
    pending: Option<Decision>,
    applied: bool,
    committed: Option<Decision>,
}

impl LaunchArbiter {
    /// Fresh arbiter; the baseline host is fixed for the arbiter's lifetime
    pub fn new(baseline_host: Option<String>) -> Self {
        Self {
            baseline_host: baseline_host.map(|h| h.to_ascii_lowercase()),
            min_dwell_passed: false,
            pending: None,
            applied: false,
            committed: None,
        }
    }

    pub fn for_points(points: &LaunchPoints) -> Self {
        Self::new(points.baseline_host())
    }

    pub fn baseline_host(&self) -> Option<&str> {
        self.baseline_host.as_deref()
    }

    pub fn pending(&self) -> Option<Decision> {
        self.pending
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }

    pub fn min_dwell_passed(&self) -> bool {
        self.min_dwell_passed
    }

    /// Decision the arbiter committed, if any
    pub fn committed(&self) -> Option<Decision> {
        self.committed
    }

    /// Compare an event locator against the baseline host
    pub fn decide(&self, locator: Option<&str>) -> Option<Decision> {
        let baseline = self.baseline_host.as_deref()?;
        let event_host = host_of(locator?)?;
        Some(Decision::from_hosts(&event_host, baseline))
    }

    pub fn on_event(&mut self, locator: Option<&str>, routing: &mut RoutingState) -> ArbiterStep {
        let Some(decision) = self.decide(locator) else {
            tracing::debug!(?locator, "Ignoring content event without comparable host");
            return ArbiterStep::Ignored;
        };

        if self.min_dwell_passed {
            return self.apply(decision, routing);
        }

        if let Some(previous) = self.pending.replace(decision) {
            tracing::debug!(%previous, %decision, "Pending decision superseded");
        }
        ArbiterStep::Buffered(decision)
    }

    pub fn on_dwell_elapsed(&mut self, routing: &mut RoutingState) -> ArbiterStep {
        self.min_dwell_passed = true;
        match self.pending.take() {
            Some(decision) => self.apply(decision, routing),
            None => ArbiterStep::Ignored,
        }
    }

    /// Commit `decision` unless one was already applied or the stage moved on.
    ///
    /// `Main` only spends the arbiter; the transition into `main` belongs to
    /// the host application.
    pub fn apply(&mut self, decision: Decision, routing: &mut RoutingState) -> ArbiterStep {
        if self.applied || routing.stage() != Stage::Loading {
            tracing::debug!(%decision, stage = %routing.stage(), "Launch decision suppressed");
            return ArbiterStep::Suppressed(decision);
        }

        self.applied = true;
        self.committed = Some(decision);
        tracing::info!(%decision, "Launch decision applied");

        match decision {
            Decision::Consent => routing.require_consent_if_needed(),
            Decision::Main => {}
        }
        ArbiterStep::Applied(decision)
    }
}

/// Result of one launch sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaunchReport {
    pub decision: Option<Decision>,
    pub applied: bool,
    pub stage: Stage,
    pub route: MainRoute,
}

/// Async driver feeding the dwell timer and the event stream into one arbiter.
///
/// Dropping the `run` future cancels both inputs; a new sequence starts from
/// an unapplied arbiter.
#[derive(Debug)]
pub struct LaunchSequence {
    dwell: Duration,
    arbiter: LaunchArbiter,
}

impl LaunchSequence {
    pub fn new(dwell: Duration, points: &LaunchPoints) -> Self {
        Self {
            dwell,
            arbiter: LaunchArbiter::for_points(points),
        }
    }

    /// Run until a decision is applied, or until the dwell has passed and the
    /// event stream has closed with nothing left to apply.
    pub async fn run(
        mut self,
        routing: &mut RoutingState,
        mut events: mpsc::Receiver<ContentEvent>,
    ) -> LaunchReport {
        let dwell = tokio::time::sleep(self.dwell);
        tokio::pin!(dwell);

        let mut dwell_done = false;
        let mut stream_open = true;

        while !self.arbiter.is_applied() && (!dwell_done || stream_open) {
            tokio::select! {
                () = &mut dwell, if !dwell_done => {
                    dwell_done = true;
                    tracing::debug!("Minimum dwell elapsed");
                    self.arbiter.on_dwell_elapsed(routing);
                }
                event = events.recv(), if stream_open => match event {
                    Some(event) => {
                        self.arbiter.on_event(event.locator.as_deref(), routing);
                    }
                    None => {
                        tracing::debug!("Content event stream closed");
                        stream_open = false;
                    }
                },
            }
        }

        if !self.arbiter.is_applied() {
            tracing::info!("Launch finished without a decision, stage stays loading");
        }

        LaunchReport {
            decision: self.arbiter.committed(),
            applied: self.arbiter.is_applied(),
            stage: routing.stage(),
            route: routing.route(),
        }
    }
}
