use std::sync::Arc;
use std::time::Duration;
use tastyroad_core::{ContentEvent, LaunchConfig, LaunchPoints, RoutingState};
use tastyroad_store::{KeyValueStore, MemoryStore};
use tokio::sync::mpsc;

pub const DWELL: Duration = Duration::from_secs(4);

pub fn sample_config() -> LaunchConfig {
    LaunchConfig {
        dwell_secs: 4.0,
        default_primary: "https://example.com/start".parse().unwrap(),
        default_secondary: "https://example.com/privacy".parse().unwrap(),
    }
}

pub fn sample_app(store: Arc<MemoryStore>) -> (RoutingState, LaunchPoints) {
    let store: Arc<dyn KeyValueStore> = store;
    let routing = RoutingState::new(store.clone());
    let points = LaunchPoints::load(store, &sample_config());
    (routing, points)
}

/// Replay `(offset from launch, locator)` pairs on a spawned task
pub fn replay(timeline: Vec<(Duration, Option<&'static str>)>) -> mpsc::Receiver<ContentEvent> {
    let (tx, rx) = mpsc::channel(16);
    tokio::spawn(async move {
        let start = tokio::time::Instant::now();
        for (offset, locator) in timeline {
            tokio::time::sleep_until(start + offset).await;
            let event = ContentEvent {
                locator: locator.map(str::to_string),
            };
            if tx.send(event).await.is_err() {
                return;
            }
        }
    });
    rx
}
