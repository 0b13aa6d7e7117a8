//! Nutrition calculation module
//!
//! Unit-to-grams conversion and macro scaling. Everything here is pure.

pub mod converter;
pub mod scaler;
pub mod units;

pub use converter::{categorize_unit, grams_for, parse_quantity};
pub use scaler::{round_half_up, round_to_tenth, scale_macros};
pub use units::{is_gram_equivalent, UnitCategory, DEFAULT_UNIT, GRAM_EQUIVALENT_UNITS};
