use serde_json::Value;

use super::App;

pub fn run_accept(app: &App) -> anyhow::Result<()> {
    println!("{}", accept(app));
    Ok(())
}

pub fn run_reset(app: &App) -> anyhow::Result<()> {
    println!("{}", reset(app));
    Ok(())
}

pub fn run_status(app: &App) -> anyhow::Result<()> {
    let routing = app.routing();
    println!("{}", serde_json::json!({ "accepted": routing.has_consent() }));
    Ok(())
}

fn accept(app: &App) -> Value {
    let mut routing = app.routing();
    routing.accept_consent();
    serde_json::json!({
        "accepted": routing.has_consent(),
        "stage": routing.stage(),
        "route": routing.route(),
    })
}

fn reset(app: &App) -> Value {
    let mut routing = app.routing();
    routing.reset_consent_for_testing();
    serde_json::json!({
        "accepted": routing.has_consent(),
        "stage": routing.stage(),
        "route": routing.route(),
    })
}
