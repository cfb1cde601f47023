//! Meal template collections

use crate::error::MealError;
use crate::types::{MealSlot, MealTemplate, TemplateCollection};
use std::sync::Arc;
use tastyroad_store::{KeyValueStore, KeyValueStoreExt};
use uuid::Uuid;

const STORE_KEY: &str = "tastyroad.templates";

pub struct TemplateStore {
    store: Arc<dyn KeyValueStore>,
    collections: Vec<TemplateCollection>,
}

impl TemplateStore {
    /// Load saved collections, seeding the starter set on first run
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        match store.load::<Vec<TemplateCollection>>(STORE_KEY) {
            Some(collections) => Self { store, collections },
            None => {
                tracing::debug!("Seeding starter templates");
                let seeded = Self {
                    store,
                    collections: bootstrap(),
                };
                seeded.persist();
                seeded
            }
        }
    }

    pub fn collections(&self) -> &[TemplateCollection] {
        &self.collections
    }

    pub fn all_templates(&self) -> Vec<MealTemplate> {
        self.collections
            .iter()
            .flat_map(|c| c.templates.iter().cloned())
            .collect()
    }

    /// Templates for one slot, oldest first
    pub fn templates_for(&self, slot: MealSlot) -> Vec<MealTemplate> {
        let mut found: Vec<_> = self
            .all_templates()
            .into_iter()
            .filter(|t| t.slot == slot)
            .collect();
        found.sort_by_key(|t| t.created_at);
        found
    }

    pub fn find_template(&self, id: Uuid) -> Option<&MealTemplate> {
        self.collections
            .iter()
            .flat_map(|c| c.templates.iter())
            .find(|t| t.id == id)
    }

    pub fn add_template(
        &mut self,
        title: &str,
        slot: MealSlot,
        note: &str,
        collection_id: Uuid,
    ) -> Result<MealTemplate, MealError> {
        if title.trim().is_empty() {
            return Err(MealError::EmptyTitle);
        }
        let collection = self
            .collections
            .iter_mut()
            .find(|c| c.id == collection_id)
            .ok_or(MealError::UnknownCollection(collection_id))?;

        let template = MealTemplate::new(title, slot, note);
        collection.templates.push(template.clone());
        self.persist();
        Ok(template)
    }

    pub fn add_collection(&mut self, name: &str) -> Result<TemplateCollection, MealError> {
        if name.trim().is_empty() {
            return Err(MealError::EmptyCollectionName);
        }
        let collection = TemplateCollection::new(name, Vec::new());
        self.collections.push(collection.clone());
        self.persist();
        Ok(collection)
    }

    /// Returns whether a template was removed
    pub fn remove_template(&mut self, id: Uuid) -> bool {
        let mut removed = false;
        for collection in &mut self.collections {
            let before = collection.templates.len();
            collection.templates.retain(|t| t.id != id);
            removed |= collection.templates.len() != before;
        }
        self.persist();
        removed
    }

    fn persist(&self) {
        self.store.save(&self.collections, STORE_KEY);
    }
}

fn bootstrap() -> Vec<TemplateCollection> {
    vec![TemplateCollection::new(
        "Daily",
        vec![
            MealTemplate::new("Eggs and Toast", MealSlot::Breakfast, "Simple and filling"),
            MealTemplate::new("Chicken Rice Bowl", MealSlot::Lunch, "Warm and balanced"),
            MealTemplate::new("Soup and Bread", MealSlot::Dinner, "Light evening meal"),
            MealTemplate::new("Fruit Snack", MealSlot::Snack, "Quick bite"),
        ],
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tastyroad_store::MemoryStore;

    fn templates() -> (Arc<MemoryStore>, TemplateStore) {
        let store = Arc::new(MemoryStore::new());
        let templates = TemplateStore::load(store.clone());
        (store, templates)
    }

    #[test]
    fn test_bootstrap_on_first_load() {
        let (store, templates) = templates();
        assert_eq!(templates.collections().len(), 1);
        assert_eq!(templates.collections()[0].name, "Daily");
        assert_eq!(templates.all_templates().len(), 4);
        assert!(store.exists(STORE_KEY));
    }

    #[test]
    fn test_saved_collections_are_not_reseeded() {
        let store = Arc::new(MemoryStore::new());
        store.save(&Vec::<TemplateCollection>::new(), STORE_KEY);

        let templates = TemplateStore::load(store);
        assert!(templates.collections().is_empty());
    }

    #[test]
    fn test_templates_for_slot() {
        let (_, templates) = templates();
        let lunch = templates.templates_for(MealSlot::Lunch);
        assert_eq!(lunch.len(), 1);
        assert_eq!(lunch[0].title, "Chicken Rice Bowl");
    }

    #[test]
    fn test_add_template_to_collection() {
        let (store, mut templates) = templates();
        let weekend = templates.add_collection("Weekend").unwrap();
        let added = templates
            .add_template("Pancakes", MealSlot::Breakfast, "with syrup", weekend.id)
            .unwrap();

        assert_eq!(templates.templates_for(MealSlot::Breakfast).len(), 2);
        assert_eq!(templates.find_template(added.id), Some(&added));

        let reloaded = TemplateStore::load(store);
        assert_eq!(reloaded.collections().len(), 2);
    }

    #[test]
    fn test_add_template_unknown_collection() {
        let (_, mut templates) = templates();
        let missing = Uuid::new_v4();
        assert_eq!(
            templates.add_template("Pancakes", MealSlot::Breakfast, "", missing),
            Err(MealError::UnknownCollection(missing))
        );
    }

    #[test]
    fn test_remove_template() {
        let (_, mut templates) = templates();
        let id = templates.all_templates()[0].id;

        assert!(templates.remove_template(id));
        assert!(!templates.remove_template(id));
        assert_eq!(templates.all_templates().len(), 3);
    }
}
