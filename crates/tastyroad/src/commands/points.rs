use serde_json::Value;
use tastyroad_core::LaunchPoints;
use url::Url;

use super::App;

pub fn run_show(app: &App) -> anyhow::Result<()> {
    println!("{}", describe(&app.points()));
    Ok(())
}

pub fn run_set_primary(app: &App, value: &str) -> anyhow::Result<()> {
    let mut points = app.points();
    let accepted = points.update_primary(value);
    println!("{}", with_accepted(describe(&points), accepted));
    Ok(())
}

pub fn run_set_secondary(app: &App, value: &str) -> anyhow::Result<()> {
    let mut points = app.points();
    let accepted = points.update_secondary(value);
    println!("{}", with_accepted(describe(&points), accepted));
    Ok(())
}

pub fn run_resume(app: &App, locator: Option<&str>) -> anyhow::Result<()> {
    let mut points = app.points();
    if let Some(locator) = locator {
        let point = Url::parse(locator.trim())
            .map_err(|e| anyhow::anyhow!("invalid resume locator {locator:?}: {e}"))?;
        points.store_resume_if_needed(&point);
    }
    println!("{}", describe(&points));
    Ok(())
}

pub fn run_reset(app: &App) -> anyhow::Result<()> {
    let mut points = app.points();
    points.reset_all();
    println!("{}", describe(&points));
    Ok(())
}

fn describe(points: &LaunchPoints) -> Value {
    serde_json::json!({
        "primary": points.primary().as_str(),
        "secondary": points.secondary().as_str(),
        "resume": points.restore_resume().map(String::from),
        "baseline_host": points.baseline_host(),
    })
}

fn with_accepted(mut output: Value, accepted: bool) -> Value {
    output["accepted"] = Value::Bool(accepted);
    output
}
