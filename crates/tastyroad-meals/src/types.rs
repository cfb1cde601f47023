//! Meal and template record types

use crate::error::MealError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }

    pub fn order_index(&self) -> usize {
        match self {
            MealSlot::Breakfast => 0,
            MealSlot::Lunch => 1,
            MealSlot::Dinner => 2,
            MealSlot::Snack => 3,
        }
    }
}

impl FromStr for MealSlot {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealSlot::ALL
            .into_iter()
            .find(|slot| slot.title().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MealError::UnknownSlot(s.to_string()))
    }
}

/// A logged meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: Uuid,
    pub slot: MealSlot,
    pub title: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl MealEntry {
    /// New entry with trimmed text
    pub fn new(slot: MealSlot, title: &str, note: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            slot,
            title: title.trim().to_string(),
            note: note.trim().to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn from_template(template: &MealTemplate) -> Self {
        Self::new(template.slot, &template.title, &template.default_note)
    }

    fn sort_key(&self) -> (usize, DateTime<Utc>) {
        (self.slot.order_index(), self.created_at)
    }
}

/// All meals logged on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMealLog {
    pub id: Uuid,
    pub day_stamp: String,
    #[serde(default)]
    pub meals: Vec<MealEntry>,
}

impl DayMealLog {
    pub fn new(day_stamp: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            day_stamp: day_stamp.into(),
            meals: Vec::new(),
        }
    }

    /// Meals by slot order, then creation time
    pub fn meals_sorted(&self) -> Vec<MealEntry> {
        let mut meals = self.meals.clone();
        meals.sort_by_key(MealEntry::sort_key);
        meals
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTemplate {
    pub id: Uuid,
    pub title: String,
    pub slot: MealSlot,
    pub default_note: String,
    pub created_at: DateTime<Utc>,
}

impl MealTemplate {
    pub fn new(title: &str, slot: MealSlot, default_note: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            slot,
            default_note: default_note.trim().to_string(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCollection {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub templates: Vec<MealTemplate>,
}

impl TemplateCollection {
    pub fn new(name: &str, templates: Vec<MealTemplate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            templates,
        }
    }
}
