//! Body-mass-index classification.
//!
//! Pure projection from (height, weight) to a rounded BMI and a category
//! label. Nothing here is ever persisted; callers recompute on every read.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the `Normal` range.
pub const NORMAL_FROM: f64 = 18.5;
/// Lower bound (inclusive) of the `Overweight` range.
pub const OVERWEIGHT_FROM: f64 = 25.0;
/// Lower bound (inclusive) of the `Obese` range.
pub const OBESE_FROM: f64 = 30.0;

/// BMI category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    /// bmi < 18.5
    Underweight,
    /// 18.5 <= bmi < 25
    Normal,
    /// 25 <= bmi < 30
    Overweight,
    /// bmi >= 30
    Obese,
}

impl Category {
    /// Pick the category for an already-rounded BMI.
    ///
    /// Ranges are half-open with the lower bound inclusive, so a value sitting
    /// exactly on a boundary lands in the higher category.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_FROM {
            Category::Underweight
        } else if bmi < OVERWEIGHT_FROM {
            Category::Normal
        } else if bmi < OBESE_FROM {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a height/weight pair.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Classification {
    /// weight / height², rounded to 2 decimals
    pub bmi: f64,
    /// Category derived from the rounded `bmi`
    pub category: Category,
}

/// Compute the BMI rounded to two decimal places.
///
/// Rounding is half away from zero. Height must be in meters and weight in
/// kilograms; both are assumed positive.
pub fn bmi(height: f64, weight: f64) -> f64 {
    round2(weight / (height * height))
}

/// Classify a height/weight pair.
pub fn classify(height: f64, weight: f64) -> Classification {
    let bmi = bmi(height, weight);
    Classification {
        bmi,
        category: Category::from_bmi(bmi),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normal_adult() {
        let c = classify(1.60, 55.0);
        assert_eq!(c.bmi, 21.48);
        assert_eq!(c.category, Category::Normal);
    }

    #[test]
    fn test_obese_adult() {
        let c = classify(1.70, 90.0);
        assert_eq!(c.bmi, 31.14);
        assert_eq!(c.category, Category::Obese);
    }

    #[test]
    fn test_underweight_to_normal_boundary() {
        let under = classify(1.6, 47.2);
        assert_eq!(under.bmi, 18.44);
        assert_eq!(under.category, Category::Underweight);

        let normal = classify(1.6, 47.36);
        assert_eq!(normal.bmi, 18.5);
        assert_eq!(normal.category, Category::Normal);
    }

    #[test]
    fn test_boundaries_land_in_higher_category() {
        assert_eq!(Category::from_bmi(18.49), Category::Underweight);
        assert_eq!(Category::from_bmi(18.5), Category::Normal);
        assert_eq!(Category::from_bmi(24.99), Category::Normal);
        assert_eq!(Category::from_bmi(25.0), Category::Overweight);
        assert_eq!(Category::from_bmi(29.99), Category::Overweight);
        assert_eq!(Category::from_bmi(30.0), Category::Obese);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 1843.75 hundredths rounds up
        assert_eq!(round2(18.4375), 18.44);
        assert_eq!(round2(21.484375), 21.48);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Overweight).unwrap();
        assert_eq!(json, "\"Overweight\"");
        assert_eq!(Category::Obese.to_string(), "Obese");
    }

    proptest! {
        #[test]
        fn prop_bmi_is_rounded_ratio(height in 0.5f64..2.5, weight in 1.0f64..300.0) {
            let c = classify(height, weight);
            let exact = weight / (height * height);
            prop_assert_eq!(c.bmi, (exact * 100.0).round() / 100.0);
            prop_assert!((c.bmi - exact).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn prop_category_matches_exactly_one_range(height in 0.5f64..2.5, weight in 1.0f64..300.0) {
            let c = classify(height, weight);
            let matches = [
                c.bmi < NORMAL_FROM,
                (NORMAL_FROM..OVERWEIGHT_FROM).contains(&c.bmi),
                (OVERWEIGHT_FROM..OBESE_FROM).contains(&c.bmi),
                c.bmi >= OBESE_FROM,
            ];
            prop_assert_eq!(matches.iter().filter(|m| **m).count(), 1);

            let expected = match matches.iter().position(|m| *m) {
                Some(0) => Category::Underweight,
                Some(1) => Category::Normal,
                Some(2) => Category::Overweight,
                _ => Category::Obese,
            };
            prop_assert_eq!(c.category, expected);
        }

        #[test]
        fn prop_classify_is_deterministic(height in 0.5f64..2.5, weight in 1.0f64..300.0) {
            prop_assert_eq!(classify(height, weight), classify(height, weight));
        }
    }
}
