use serde_json::Value;
use tastyroad_core::Stage;

use super::App;

pub fn run(app: &App) -> anyhow::Result<()> {
    println!("{}", status(app));
    Ok(())
}

fn status(app: &App) -> Value {
    let routing = app.routing();
    let points = app.points();

    // Stage a consent decision would commit on the next launch
    let consent_resolves_to = if routing.has_consent() {
        Stage::Main
    } else {
        Stage::Consent
    };

    serde_json::json!({
        "data_dir": app.paths.root.display().to_string(),
        "consent": routing.has_consent(),
        "consent_resolves_to": consent_resolves_to,
        "dwell_secs": app.config.dwell().as_secs_f64(),
        "primary": points.primary().as_str(),
        "secondary": points.secondary().as_str(),
        "resume": points.restore_resume().map(String::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_app;

    #[test]
    fn test_status_fresh_install() {
        let (_temp, app) = test_app();
        let output = status(&app);

        assert_eq!(output["consent"], false);
        assert_eq!(output["consent_resolves_to"], "consent");
        assert_eq!(output["dwell_secs"], 4.0);
        assert_eq!(output["resume"], Value::Null);
    }

    #[test]
    fn test_status_after_consent() {
        let (_temp, app) = test_app();
        app.routing().accept_consent();

        let output = status(&app);
        assert_eq!(output["consent"], true);
        assert_eq!(output["consent_resolves_to"], "main");
    }

    #[test]
    fn test_status_reads_config_file() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.json"), r#"{"dwell_secs": 2.5}"#).unwrap();
        let app = App::open(Some(temp.path())).unwrap();

        assert_eq!(status(&app)["dwell_secs"], 2.5);
    }
}
