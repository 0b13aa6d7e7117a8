//! Data models
//!
//! Plain structs for catalog foods, logged entries and the per-day log.

mod daily_log;
mod food_definition;
mod logged_entry;
mod nutrition;

pub use daily_log::{date_key, DailyLog};
pub use food_definition::{catalog, find_food, FoodDefinition};
pub use logged_entry::LoggedEntry;
pub use nutrition::{BaseMacros, Macros, ScaledMacros};
