//! Unit conversion functions
//!
//! Turns a quantity typed by the user and a unit into grams of a food.

use super::units::{is_gram_equivalent, UnitCategory};
use crate::models::FoodDefinition;

/// Categorize a unit for a particular food
pub fn categorize_unit(unit: &str, food: &FoodDefinition) -> UnitCategory {
    if is_gram_equivalent(unit) {
        UnitCategory::GramEquivalent
    } else if food.unit_to_grams.contains_key(unit) {
        UnitCategory::FoodSpecific
    } else {
        UnitCategory::Unmapped
    }
}

/// Convert `quantity` of `unit` into grams of `food`
///
/// Without a food the result is always 0. A unit the food has no factor
/// for is taken as one gram per unit. Never fails.
///
/// Examples (Roti, piece = 40g):
/// - 2 "piece" -> 80.0
/// - 50 "grams" -> 50.0
/// - 3 "bowl" -> 3.0
pub fn grams_for(quantity: f64, unit: &str, food: Option<&FoodDefinition>) -> f64 {
    let Some(food) = food else {
        return 0.0;
    };

    match categorize_unit(unit, food) {
        UnitCategory::GramEquivalent => quantity,
        UnitCategory::FoodSpecific => quantity * food.unit_to_grams[unit],
        UnitCategory::Unmapped => {
            tracing::debug!(
                "No gram factor for unit '{}' on '{}'. Treating as 1g per unit.",
                unit,
                food.name
            );
            quantity
        }
    }
}

/// Parse the quantity text field
///
/// Empty, non-numeric, non-finite and negative input all read as 0.
pub fn parse_quantity(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::find_food;

    #[test]
    fn test_gram_units_pass_through_with_food() {
        let milk = find_food("milk");
        for unit in ["grams", "g", "ml"] {
            assert_eq!(grams_for(150.0, unit, milk), 150.0);
            assert_eq!(grams_for(0.0, unit, milk), 0.0);
        }
    }

    #[test]
    fn test_no_food_is_zero() {
        for unit in ["grams", "g", "ml", "cup", "piece"] {
            assert_eq!(grams_for(150.0, unit, None), 0.0);
        }
    }

    #[test]
    fn test_mapped_unit_uses_factor() {
        assert_eq!(grams_for(2.0, "piece", find_food("roti")), 80.0);
        assert_eq!(grams_for(1.0, "cup", find_food("milk")), 240.0);
        assert_eq!(grams_for(1.5, "piece", find_food("chicken")), 180.0);
    }

    #[test]
    fn test_unmapped_unit_falls_back_to_one() {
        let roti = find_food("roti");
        assert_eq!(grams_for(3.0, "bowl", roti), 3.0);
        assert_eq!(grams_for(2.0, "cup", roti), 2.0);
    }

    #[test]
    fn test_categorize_unit() {
        let milk = find_food("milk").unwrap();
        assert_eq!(categorize_unit("g", milk), UnitCategory::GramEquivalent);
        assert_eq!(categorize_unit("ml", milk), UnitCategory::GramEquivalent);
        assert_eq!(categorize_unit("cup", milk), UnitCategory::FoodSpecific);
        assert_eq!(categorize_unit("piece", milk), UnitCategory::Unmapped);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2"), 2.0);
        assert_eq!(parse_quantity(" 1.5 "), 1.5);
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("abc"), 0.0);
        assert_eq!(parse_quantity("-3"), 0.0);
        assert_eq!(parse_quantity("NaN"), 0.0);
        assert_eq!(parse_quantity("inf"), 0.0);
    }
}
