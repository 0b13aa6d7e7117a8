//! Shared macro-nutrient data structures
//!
//! Used by food definitions, logged entries and day totals.

use serde::{Deserialize, Serialize};

/// Macro-nutrient values
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64, // grams
    pub fat: f64,     // grams
    pub carbs: f64,   // grams
    pub fiber: f64,   // grams
}

impl Macros {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale all values by a multiplier, without rounding
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            fat: self.fat * multiplier,
            carbs: self.carbs * multiplier,
            fiber: self.fiber * multiplier,
        }
    }

    pub fn add(&self, other: &Macros) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
            fiber: self.fiber + other.fiber,
        }
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Macros {
    type Output = Macros;

    fn mul(self, multiplier: f64) -> Macros {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::zero(), |acc, m| acc + m)
    }
}

/// Macro values of a food, defined for `reference_grams` of it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseMacros {
    #[serde(flatten)]
    pub macros: Macros,
    pub reference_grams: f64,
}

impl BaseMacros {
    pub fn new(
        calories: f64,
        protein: f64,
        fat: f64,
        carbs: f64,
        fiber: f64,
        reference_grams: f64,
    ) -> Self {
        Self {
            macros: Macros {
                calories,
                protein,
                fat,
                carbs,
                fiber,
            },
            reference_grams,
        }
    }
}

/// Macros scaled to a concrete gram amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledMacros {
    pub grams: f64,
    #[serde(flatten)]
    pub macros: Macros,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Macros = std::iter::empty().sum();
        assert_eq!(total, Macros::zero());
    }

    #[test]
    fn test_add_and_scale() {
        let a = BaseMacros::new(100.0, 2.0, 1.0, 20.0, 3.0, 50.0).macros;
        let b = a * 2.0;
        assert_eq!(b.calories, 200.0);
        assert_eq!(b.fiber, 6.0);

        let total = a + b;
        assert_eq!(total.calories, 300.0);
        assert_eq!(total.carbs, 60.0);
    }
}
