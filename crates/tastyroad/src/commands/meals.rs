use serde_json::Value;
use tastyroad_meals::format::{parse_day_stamp, readable_day, shift_day, today_stamp};
use tastyroad_meals::{MealEntry, MealLogStore};

use super::App;
use crate::cli::MealsAction;

pub fn run(app: &App, action: MealsAction) -> anyhow::Result<()> {
    let output = execute(app, action)?;
    println!("{output}");
    Ok(())
}

/// Resolve an optional `--day` to a validated stamp, defaulting to today
pub(crate) fn resolve_day(day: Option<String>) -> anyhow::Result<String> {
    let Some(day) = day else {
        return Ok(today_stamp());
    };

    match day.trim() {
        "today" => Ok(today_stamp()),
        "yesterday" => Ok(shift_day(&today_stamp(), -1)?),
        "tomorrow" => Ok(shift_day(&today_stamp(), 1)?),
        stamp => {
            parse_day_stamp(stamp)?;
            Ok(stamp.to_string())
        }
    }
}

fn execute(app: &App, action: MealsAction) -> anyhow::Result<Value> {
    let mut log = MealLogStore::load(app.store.clone());

    match action {
        MealsAction::List { day } => {
            let day = resolve_day(day)?;
            Ok(describe_day(&mut log, &day))
        }
        MealsAction::Add {
            slot,
            title,
            note,
            day,
        } => {
            let day = resolve_day(day)?;
            let entry = MealEntry::new(slot, &title, &note);
            log.upsert_meal(&day, entry.clone())?;
            Ok(serde_json::json!({ "day": day, "added": entry }))
        }
        MealsAction::Delete { id, day } => {
            let day = resolve_day(day)?;
            if !log.delete_meal(&day, id) {
                anyhow::bail!("no meal {id} on {day}");
            }
            Ok(serde_json::json!({ "day": day, "deleted": id }))
        }
        MealsAction::Clear => {
            log.clear_all();
            Ok(serde_json::json!({ "cleared": true }))
        }
    }
}

pub(crate) fn describe_day(log: &mut MealLogStore, day: &str) -> Value {
    let meals = log.log_for(day).meals_sorted();
    serde_json::json!({
        "day": day,
        "title": readable_day(day),
        "meals": meals,
    })
}
