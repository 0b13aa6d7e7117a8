//! Food definitions and the built-in catalog
//!
//! Catalog entries are static reference data: built once, never mutated.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::BaseMacros;
use crate::nutrition::units::DEFAULT_UNIT;

/// A food with macros at a reference weight and the units it can be logged in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDefinition {
    pub id: String,
    pub name: String,
    pub base: BaseMacros,
    /// Units offered for this food, first one is the default
    pub supported_units: Vec<String>,
    /// Grams per unit; "grams", "g" and "ml" never need an entry
    #[serde(default)]
    pub unit_to_grams: HashMap<String, f64>,
}

impl FoodDefinition {
    pub fn new(id: &str, name: &str, base: BaseMacros) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            base,
            supported_units: Vec::new(),
            unit_to_grams: HashMap::new(),
        }
    }

    /// Offer a unit without a conversion factor
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.supported_units.push(unit.to_string());
        self
    }

    /// Offer a unit weighing `grams` per unit
    pub fn with_unit_grams(mut self, unit: &str, grams: f64) -> Self {
        self.supported_units.push(unit.to_string());
        self.unit_to_grams.insert(unit.to_string(), grams);
        self
    }

    /// Register a conversion factor for a unit that is not offered
    pub fn with_conversion(mut self, unit: &str, grams: f64) -> Self {
        self.unit_to_grams.insert(unit.to_string(), grams);
        self
    }

    /// Units to show in a unit picker
    pub fn unit_options(&self) -> Vec<String> {
        if self.supported_units.is_empty() {
            vec![DEFAULT_UNIT.to_string()]
        } else {
            self.supported_units.clone()
        }
    }

    /// Unit preselected when the food is chosen
    pub fn default_unit(&self) -> &str {
        self.supported_units
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_UNIT)
    }
}

/// The built-in food catalog
pub fn catalog() -> &'static [FoodDefinition] {
    static CATALOG: OnceLock<Vec<FoodDefinition>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            FoodDefinition::new("roti", "Roti", BaseMacros::new(110.0, 3.0, 3.0, 18.0, 2.0, 40.0))
                .with_unit_grams("piece", 40.0)
                .with_unit("grams"),
            FoodDefinition::new(
                "milk",
                "Milk (toned)",
                BaseMacros::new(60.0, 3.0, 3.0, 5.0, 0.0, 100.0),
            )
            .with_unit_grams("ml", 1.0)
            .with_unit_grams("cup", 240.0)
            .with_unit("grams"),
            FoodDefinition::new(
                "chicken",
                "Chicken Breast (cooked)",
                BaseMacros::new(165.0, 31.0, 3.6, 0.0, 0.0, 100.0),
            )
            .with_unit("grams")
            .with_unit_grams("piece", 120.0),
        ]
    })
}

/// Look up a catalog food by id
pub fn find_food(id: &str) -> Option<&'static FoodDefinition> {
    catalog().iter().find(|food| food.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let ids: Vec<&str> = catalog().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["roti", "milk", "chicken"]);

        let milk = find_food("milk").unwrap();
        assert_eq!(milk.supported_units, vec!["ml", "cup", "grams"]);
        assert_eq!(milk.unit_to_grams.get("cup"), Some(&240.0));
        assert_eq!(milk.base.reference_grams, 100.0);
    }

    #[test]
    fn test_find_unknown_food() {
        assert!(find_food("pizza").is_none());
    }

    #[test]
    fn test_default_unit_and_options() {
        let roti = find_food("roti").unwrap();
        assert_eq!(roti.default_unit(), "piece");
        assert_eq!(roti.unit_options(), vec!["piece", "grams"]);

        let bare = FoodDefinition::new("x", "X", BaseMacros::new(1.0, 0.0, 0.0, 0.0, 0.0, 1.0));
        assert_eq!(bare.default_unit(), "grams");
        assert_eq!(bare.unit_options(), vec!["grams"]);
    }
}
