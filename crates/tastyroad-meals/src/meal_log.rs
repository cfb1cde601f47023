//! Per-day meal log store

use crate::error::MealError;
use crate::types::{DayMealLog, MealEntry};
use std::sync::Arc;
use tastyroad_store::{KeyValueStore, KeyValueStoreExt};
use uuid::Uuid;

const STORE_KEY: &str = "tastyroad.meallogs";

/// Day logs, newest day first
pub struct MealLogStore {
    store: Arc<dyn KeyValueStore>,
    days: Vec<DayMealLog>,
}

impl MealLogStore {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let saved: Option<Vec<DayMealLog>> = store.load(STORE_KEY);
        let mut log = Self {
            store,
            days: saved.clone().unwrap_or_default(),
        };
        if saved.is_none() {
            log.persist();
        }
        log
    }

    pub fn days(&self) -> &[DayMealLog] {
        &self.days
    }

    /// Log for `day_stamp`, creating an empty one at the front if missing
    pub fn log_for(&mut self, day_stamp: &str) -> DayMealLog {
        if let Some(found) = self.days.iter().find(|d| d.day_stamp == day_stamp) {
            return found.clone();
        }

        let created = DayMealLog::new(day_stamp);
        self.days.insert(0, created.clone());
        self.persist();
        created
    }

    /// Replace the entry with the same id, or append it to the day
    pub fn upsert_meal(&mut self, day_stamp: &str, entry: MealEntry) -> Result<(), MealError> {
        if entry.title.trim().is_empty() {
            return Err(MealError::EmptyTitle);
        }

        match self.days.iter_mut().find(|d| d.day_stamp == day_stamp) {
            Some(day) => match day.meals.iter_mut().find(|m| m.id == entry.id) {
                Some(existing) => *existing = entry,
                None => day.meals.push(entry),
            },
            None => {
                let mut created = DayMealLog::new(day_stamp);
                created.meals.push(entry);
                self.days.insert(0, created);
            }
        }

        self.normalize_order();
        self.persist();
        Ok(())
    }

    /// Remove a meal; the day goes with it once empty. Returns whether anything was removed
    pub fn delete_meal(&mut self, day_stamp: &str, id: Uuid) -> bool {
        let Some(index) = self.days.iter().position(|d| d.day_stamp == day_stamp) else {
            return false;
        };

        let day = &mut self.days[index];
        let before = day.meals.len();
        day.meals.retain(|m| m.id != id);
        let removed = day.meals.len() != before;

        if day.meals.is_empty() {
            self.days.remove(index);
        }
        self.persist();
        removed
    }

    pub fn clear_all(&mut self) {
        self.days.clear();
        self.persist();
    }

    fn normalize_order(&mut self) {
        self.days.sort_by(|a, b| b.day_stamp.cmp(&a.day_stamp));
        for day in &mut self.days {
            day.meals = day.meals_sorted();
        }
    }

    fn persist(&self) {
        self.store.save(&self.days, STORE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MealSlot;
    use tastyroad_store::MemoryStore;

    fn log() -> (Arc<MemoryStore>, MealLogStore) {
        let store = Arc::new(MemoryStore::new());
        let log = MealLogStore::load(store.clone());
        (store, log)
    }

    #[test]
    fn test_first_load_persists_empty_list() {
        let (store, log) = log();
        assert!(log.days().is_empty());
        assert!(store.exists(STORE_KEY));
    }

    #[test]
    fn test_log_for_creates_day_once() {
        let (_, mut log) = log();
        let first = log.log_for("2026-10-16");
        let second = log.log_for("2026-10-16");
        assert_eq!(first.id, second.id);
        assert_eq!(log.days().len(), 1);
    }

    #[test]
    fn test_upsert_orders_days_descending() {
        let (_, mut log) = log();
        log.upsert_meal("2026-10-14", MealEntry::new(MealSlot::Lunch, "Rice", ""))
            .unwrap();
        log.upsert_meal("2026-10-16", MealEntry::new(MealSlot::Dinner, "Soup", ""))
            .unwrap();
        log.upsert_meal("2026-10-15", MealEntry::new(MealSlot::Snack, "Fruit", ""))
            .unwrap();

        let stamps: Vec<_> = log.days().iter().map(|d| d.day_stamp.as_str()).collect();
        assert_eq!(stamps, vec!["2026-10-16", "2026-10-15", "2026-10-14"]);
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let (_, mut log) = log();
        let mut entry = MealEntry::new(MealSlot::Breakfast, "Eggs", "");
        log.upsert_meal("2026-10-16", entry.clone()).unwrap();

        entry.title = "Eggs and Toast".to_string();
        log.upsert_meal("2026-10-16", entry.clone()).unwrap();

        let day = log.log_for("2026-10-16");
        assert_eq!(day.meals.len(), 1);
        assert_eq!(day.meals[0].title, "Eggs and Toast");
    }

    #[test]
    fn test_upsert_rejects_blank_title() {
        let (_, mut log) = log();
        let result = log.upsert_meal("2026-10-16", MealEntry::new(MealSlot::Lunch, "   ", ""));
        assert_eq!(result, Err(MealError::EmptyTitle));
        assert!(log.days().is_empty());
    }

    #[test]
    fn test_delete_last_meal_removes_day() {
        let (_, mut log) = log();
        let entry = MealEntry::new(MealSlot::Lunch, "Rice", "");
        log.upsert_meal("2026-10-16", entry.clone()).unwrap();

        assert!(log.delete_meal("2026-10-16", entry.id));
        assert!(log.days().is_empty());
        assert!(!log.delete_meal("2026-10-16", entry.id));
    }

    #[test]
    fn test_reload_from_store() {
        let (store, mut log) = log();
        log.upsert_meal("2026-10-16", MealEntry::new(MealSlot::Dinner, "Soup", "light"))
            .unwrap();

        let reloaded = MealLogStore::load(store);
        assert_eq!(reloaded.days(), log.days());

        log.clear_all();
        assert!(log.days().is_empty());
    }

    #[test]
    fn test_meals_survive_reopen() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("store.json");

        {
            let store = Arc::new(tastyroad_store::JsonFileStore::open(&path).unwrap());
            let mut log = MealLogStore::load(store);
            log.upsert_meal("2026-10-16", MealEntry::new(MealSlot::Lunch, "Rice", ""))
                .unwrap();
        }

        let store = Arc::new(tastyroad_store::JsonFileStore::open(&path).unwrap());
        let log = MealLogStore::load(store);
        assert_eq!(log.days().len(), 1);
        assert_eq!(log.days()[0].meals[0].title, "Rice");
    }
}
