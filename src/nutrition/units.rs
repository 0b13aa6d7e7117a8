//! Unit names and categories
//!
//! Only grams and milliliters have a fixed gram weight; every other unit
//! needs a per-food conversion factor.

use serde::{Deserialize, Serialize};

/// Unit used when a food offers no units of its own
pub const DEFAULT_UNIT: &str = "grams";

/// Units taken as one gram per unit regardless of the food
///
/// Milliliters are treated as grams; density is not considered.
pub const GRAM_EQUIVALENT_UNITS: [&str; 3] = ["grams", "g", "ml"];

/// How a unit maps to grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// One gram per unit ("grams", "g", "ml")
    GramEquivalent,
    /// The food defines grams per unit (cup, piece, ...)
    FoodSpecific,
    /// The food has no factor; falls back to one gram per unit
    Unmapped,
}

/// Exact, case-sensitive match against the gram-equivalent units
pub fn is_gram_equivalent(unit: &str) -> bool {
    GRAM_EQUIVALENT_UNITS.contains(&unit)
}
