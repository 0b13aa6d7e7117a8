//! Macro scaling
//!
//! Linear scaling of a food's base macros to a gram amount, with the
//! display rounding applied: whole calories and grams, one decimal for the
//! rest.

use crate::models::{BaseMacros, Macros, ScaledMacros};

/// Round to the nearest integer, halves rounding up
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, halves rounding up
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Scale `base` to `grams` of the food
///
/// A reference weight of 0 is treated as 1 so the result stays finite.
pub fn scale_macros(base: &BaseMacros, grams: f64) -> ScaledMacros {
    let reference = if base.reference_grams == 0.0 {
        1.0
    } else {
        base.reference_grams
    };
    let raw = base.macros.scale(grams / reference);

    ScaledMacros {
        grams: round_half_up(grams),
        macros: Macros {
            calories: round_half_up(raw.calories),
            protein: round_to_tenth(raw.protein),
            fat: round_to_tenth(raw.fat),
            carbs: round_to_tenth(raw.carbs),
            fiber: round_to_tenth(raw.fiber),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::find_food;
    use crate::nutrition::grams_for;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn assert_scaled(s: &ScaledMacros, expected: [f64; 6]) {
        assert_close(s.macros.calories, expected[0]);
        assert_close(s.macros.protein, expected[1]);
        assert_close(s.macros.fat, expected[2]);
        assert_close(s.macros.carbs, expected[3]);
        assert_close(s.macros.fiber, expected[4]);
        assert_close(s.grams, expected[5]);
    }

    #[test]
    fn test_two_roti() {
        let roti = find_food("roti").unwrap();
        let grams = grams_for(2.0, "piece", Some(roti));
        let scaled = scale_macros(&roti.base, grams);
        assert_scaled(&scaled, [220.0, 6.0, 6.0, 36.0, 4.0, 80.0]);
    }

    #[test]
    fn test_one_cup_milk() {
        let milk = find_food("milk").unwrap();
        let grams = grams_for(1.0, "cup", Some(milk));
        let scaled = scale_macros(&milk.base, grams);
        assert_scaled(&scaled, [144.0, 7.2, 7.2, 12.0, 0.0, 240.0]);
    }

    #[test]
    fn test_identity_at_reference_weight() {
        for food in crate::models::catalog() {
            let scaled = scale_macros(&food.base, food.base.reference_grams);
            assert_eq!(scaled.macros, food.base.macros);
            assert_eq!(scaled.grams, food.base.reference_grams);
        }
    }

    #[test]
    fn test_linear_up_to_rounding() {
        let chicken = find_food("chicken").unwrap();
        for grams in [37.0, 100.0, 155.5, 333.0] {
            let single = scale_macros(&chicken.base, grams);
            let double = scale_macros(&chicken.base, grams * 2.0);
            // each call rounds independently
            assert!((double.macros.calories - 2.0 * single.macros.calories).abs() <= 1.5);
            assert!((double.macros.protein - 2.0 * single.macros.protein).abs() <= 0.15 + 1e-9);
        }
    }

    #[test]
    fn test_zero_grams() {
        let roti = find_food("roti").unwrap();
        let scaled = scale_macros(&roti.base, 0.0);
        assert_eq!(scaled.macros, Macros::zero());
        assert_eq!(scaled.grams, 0.0);
    }

    #[test]
    fn test_zero_reference_grams_is_guarded() {
        let base = BaseMacros::new(10.0, 1.0, 0.5, 2.0, 0.0, 0.0);
        let scaled = scale_macros(&base, 3.0);
        assert_scaled(&scaled, [30.0, 3.0, 1.5, 6.0, 0.0, 3.0]);
    }

    #[test]
    fn test_rounding_halves_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_close(round_to_tenth(0.25), 0.3);
        assert_close(round_to_tenth(7.199999999999999), 7.2);
    }

    #[test]
    fn test_fractional_grams_round() {
        let chicken = find_food("chicken").unwrap();
        let scaled = scale_macros(&chicken.base, 50.4);
        assert_close(scaled.grams, 50.0);
        // 165 * 0.504 = 83.16
        assert_close(scaled.macros.calories, 83.0);
        // 31 * 0.504 = 15.624
        assert_close(scaled.macros.protein, 15.6);
    }
}
