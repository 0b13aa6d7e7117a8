//! Logged entry model
//!
//! A specific quantity of a food added to a day's log.

use serde::{Deserialize, Serialize};

use super::{FoodDefinition, Macros, ScaledMacros};

/// An immutable record of food eaten
///
/// Values are copied from the food at logging time, so later catalog
/// changes never alter what was logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedEntry {
    pub food_name: String,
    pub grams: f64,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
}

impl LoggedEntry {
    pub fn from_scaled(food: &FoodDefinition, scaled: &ScaledMacros) -> Self {
        Self {
            food_name: food.name.clone(),
            grams: scaled.grams,
            calories: scaled.macros.calories,
            protein: scaled.macros.protein,
            fat: scaled.macros.fat,
            carbs: scaled.macros.carbs,
            fiber: scaled.macros.fiber,
        }
    }

    pub fn macros(&self) -> Macros {
        Macros {
            calories: self.calories,
            protein: self.protein,
            fat: self.fat,
            carbs: self.carbs,
            fiber: self.fiber,
        }
    }
}
