//! Stage and sub-route state machine

use crate::types::{MainRoute, Stage};
use serde::Serialize;
use std::sync::Arc;
use tastyroad_store::{KeyValueStore, KeyValueStoreExt};
use tokio::sync::watch;

/// Presence of this key (any value) means consent was granted
pub const CONSENT_KEY: &str = "tastyroad.user.consent.accepted";

/// Snapshot published to observers after every mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RouteSnapshot {
    pub stage: Stage,
    pub route: MainRoute,
}

/// Which screen the application presents.
///
/// `loading -> {consent, main}`, `consent -> main` via [`accept_consent`].
/// Route switches are only meaningful while the stage is `main`.
///
/// [`accept_consent`]: RoutingState::accept_consent
pub struct RoutingState {
    store: Arc<dyn KeyValueStore>,
    stage: Stage,
    route: MainRoute,
    started: bool,
    notifier: watch::Sender<RouteSnapshot>,
}

impl RoutingState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let (notifier, _) = watch::channel(RouteSnapshot::default());
        let mut state = Self {
            store,
            stage: Stage::Loading,
            route: MainRoute::Menu,
            started: false,
            notifier,
        };
        state.start();
        state
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn route(&self) -> MainRoute {
        self.route
    }

    pub fn snapshot(&self) -> RouteSnapshot {
        RouteSnapshot {
            stage: self.stage,
            route: self.route,
        }
    }

    /// Observe every stage or route change
    pub fn subscribe(&self) -> watch::Receiver<RouteSnapshot> {
        self.notifier.subscribe()
    }

    pub fn has_consent(&self) -> bool {
        self.store.exists(CONSENT_KEY)
    }

    /// Enter `loading`; only the first call per instance has any effect
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.set(Stage::Loading, MainRoute::Menu);
    }

    /// Commit the consent gate: `main` when consent is on record, `consent` otherwise
    pub fn require_consent_if_needed(&mut self) {
        if self.has_consent() {
            tracing::info!("Consent on record, entering main");
            self.set(Stage::Main, MainRoute::Menu);
            return;
        }

        tracing::info!("No consent on record, entering consent gate");
        self.set(Stage::Consent, MainRoute::Menu);
    }

    /// The host application's own transition into `main`
    pub fn allow_main_from_content_flow(&mut self) {
        self.set(Stage::Main, MainRoute::Menu);
    }

    pub fn accept_consent(&mut self) {
        self.store.save(&true, CONSENT_KEY);
        tracing::info!("Consent accepted");
        self.set(Stage::Main, MainRoute::Menu);
    }

    /// Test and debug harnesses only
    pub fn reset_consent_for_testing(&mut self) {
        self.store.remove(CONSENT_KEY);
        self.set(Stage::Consent, MainRoute::Menu);
    }

    pub fn go_menu(&mut self) {
        self.set_route(MainRoute::Menu);
    }

    pub fn go_templates(&mut self) {
        self.set_route(MainRoute::Templates);
    }

    pub fn go_meal_log(&mut self) {
        self.set_route(MainRoute::MealLog);
    }

    pub fn go_settings(&mut self) {
        self.set_route(MainRoute::Settings);
    }

    fn set_route(&mut self, route: MainRoute) {
        self.route = route;
        self.publish();
    }

    fn set(&mut self, stage: Stage, route: MainRoute) {
        if stage != self.stage {
            tracing::debug!(from = %self.stage, to = %stage, "Stage transition");
        }
        self.stage = stage;
        self.route = route;
        self.publish();
    }

    fn publish(&self) {
        self.notifier.send_replace(self.snapshot());
    }
}

impl std::fmt::Debug for RoutingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingState")
            .field("stage", &self.stage)
            .field("route", &self.route)
            .field("started", &self.started)
            .finish()
    }
}
