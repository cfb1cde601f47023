//! Meal log and template records persisted through the key-value store

mod error;
pub mod format;
mod meal_log;
mod templates;
mod types;

pub use error::MealError;
pub use meal_log::MealLogStore;
pub use templates::TemplateStore;
pub use types::{DayMealLog, MealEntry, MealSlot, MealTemplate, TemplateCollection};
