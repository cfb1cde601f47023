use serde_json::Value;
use tastyroad_meals::{MealEntry, MealLogStore, TemplateStore};

use super::meals::resolve_day;
use super::App;
use crate::cli::TemplatesAction;

pub fn run(app: &App, action: TemplatesAction) -> anyhow::Result<()> {
    let output = execute(app, action)?;
    println!("{output}");
    Ok(())
}

fn execute(app: &App, action: TemplatesAction) -> anyhow::Result<Value> {
    let mut templates = TemplateStore::load(app.store.clone());

    match action {
        TemplatesAction::List { slot } => match slot {
            Some(slot) => Ok(serde_json::json!({
                "slot": slot,
                "templates": templates.templates_for(slot),
            })),
            None => Ok(serde_json::json!({ "collections": templates.collections() })),
        },
        TemplatesAction::AddCollection { name } => {
            let collection = templates.add_collection(&name)?;
            Ok(serde_json::json!({ "added": collection }))
        }
        TemplatesAction::Add {
            collection,
            slot,
            title,
            note,
        } => {
            let template = templates.add_template(&title, slot, &note, collection)?;
            Ok(serde_json::json!({ "added": template }))
        }
        TemplatesAction::Remove { id } => {
            if !templates.remove_template(id) {
                anyhow::bail!("no template with id {id}");
            }
            Ok(serde_json::json!({ "removed": id }))
        }
        TemplatesAction::Use { id, day } => {
            let Some(template) = templates.find_template(id) else {
                anyhow::bail!("no template with id {id}");
            };
            let day = resolve_day(day)?;
            let entry = MealEntry::from_template(template);

            let mut log = MealLogStore::load(app.store.clone());
            log.upsert_meal(&day, entry.clone())?;
            Ok(serde_json::json!({ "day": day, "added": entry }))
        }
    }
}
