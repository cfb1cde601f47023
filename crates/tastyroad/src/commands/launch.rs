use std::time::Duration;

use serde_json::Value;
use tastyroad_core::{ContentEvent, LaunchSequence};
use tokio::sync::mpsc;

use super::App;

/// One replayed content event, `offset` after launch
#[derive(Debug, Clone, PartialEq, Eq)]
struct TimedEvent {
    offset: Duration,
    event: ContentEvent,
}

pub fn run(
    app: &App,
    events: &[String],
    event_delay_ms: u64,
    dwell_ms: Option<u64>,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let dwell = dwell_ms.map_or_else(|| app.config.dwell(), Duration::from_millis);
    let timeline = parse_timeline(events, Duration::from_millis(event_delay_ms));

    let output = runtime.block_on(launch(app, dwell, timeline));
    println!("{output}");
    Ok(())
}

async fn launch(app: &App, dwell: Duration, timeline: Vec<TimedEvent>) -> Value {
    let mut routing = app.routing();
    let points = app.points();
    let start_point = points.start_point();

    let (tx, rx) = mpsc::channel(16);
    let replay = tokio::spawn(async move {
        let start = tokio::time::Instant::now();
        for timed in timeline {
            tokio::time::sleep_until(start + timed.offset).await;
            if tx.send(timed.event).await.is_err() {
                break;
            }
        }
    });

    let report = LaunchSequence::new(dwell, &points)
        .run(&mut routing, rx)
        .await;
    replay.abort();

    serde_json::json!({
        "stage": report.stage,
        "route": report.route,
        "decision": report.decision,
        "applied": report.applied,
        "baseline_host": points.baseline_host(),
        "start_point": start_point.as_str(),
    })
}

/// `LOCATOR[@+MS]`; `-` is an event without a locator. Events lacking an
/// offset follow the previous one by `spacing`.
fn parse_timeline(events: &[String], spacing: Duration) -> Vec<TimedEvent> {
    let mut previous = Duration::ZERO;
    events
        .iter()
        .map(|raw| {
            let (locator, offset) = match raw.rsplit_once("@+") {
                Some((locator, ms)) => match ms.parse::<u64>() {
                    Ok(ms) => (locator, Duration::from_millis(ms)),
                    Err(_) => (raw.as_str(), previous + spacing),
                },
                None => (raw.as_str(), previous + spacing),
            };
            previous = offset;

            let event = match locator.trim() {
                "" | "-" => ContentEvent::empty(),
                locator => ContentEvent::new(locator),
            };
            TimedEvent { offset, event }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_app;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_parse_timeline_offsets() {
        let events = vec![
            "https://example.com".to_string(),
            "https://other.com@+4200".to_string(),
            "-".to_string(),
            "https://user@host.com/".to_string(),
        ];
        let timeline = parse_timeline(&events, ms(500));

        assert_eq!(timeline[0].offset, ms(500));
        assert_eq!(timeline[1].offset, ms(4200));
        assert_eq!(timeline[1].event, ContentEvent::new("https://other.com"));
        assert_eq!(timeline[2].offset, ms(4700));
        assert_eq!(timeline[2].event, ContentEvent::empty());
        assert_eq!(timeline[3].event, ContentEvent::new("https://user@host.com/"));
        assert_eq!(timeline[3].offset, ms(5200));
    }

    #[test]
    fn test_parse_timeline_keeps_at_sign_in_locator() {
        let events = vec![
            "https://host.com/a@123".to_string(),
            "https://host.com/b@123@+900".to_string(),
        ];
        let timeline = parse_timeline(&events, ms(500));

        assert_eq!(timeline[0].event, ContentEvent::new("https://host.com/a@123"));
        assert_eq!(timeline[0].offset, ms(500));
        assert_eq!(timeline[1].event, ContentEvent::new("https://host.com/b@123"));
        assert_eq!(timeline[1].offset, ms(900));
    }

    #[tokio::test(start_paused = true)]
    async fn test_launch_reports_consent_for_baseline_host() {
        let (_temp, app) = test_app();
        let baseline = app.points().primary().to_string();
        let timeline = parse_timeline(&[format!("{baseline}@+100")], ms(500));

        let output = launch(&app, ms(1000), timeline).await;

        assert_eq!(output["stage"], "consent");
        assert_eq!(output["decision"], "consent");
        assert_eq!(output["applied"], true);
    }

    #[tokio::test(start_paused = true)]
    async fn test_launch_without_events_stays_loading() {
        let (_temp, app) = test_app();

        let output = launch(&app, ms(1000), Vec::new()).await;

        assert_eq!(output["stage"], "loading");
        assert_eq!(output["decision"], Value::Null);
        assert_eq!(output["applied"], false);
    }
}
