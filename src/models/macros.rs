//! Shared macro-nutrition value
//!
//! Used by food entries and the energy-balance calculator.

use serde::{Deserialize, Serialize};

/// Calorie and macronutrient amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl Macros {
    /// Create a new Macros with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Add another Macros to this one
    pub fn add(&self, other: &Macros) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_add() {
        let per_100g = Macros {
            calories: 52.0,
            protein: 0.3,
            carbs: 14.0,
            fat: 0.2,
        };
        let portion = per_100g * 1.5;
        assert_eq!(portion.calories, 78.0);
        assert_eq!(portion.carbs, 21.0);

        let doubled = portion + portion;
        assert_eq!(doubled.calories, 156.0);
    }

    #[test]
    fn test_sum() {
        let entries = vec![
            Macros { calories: 400.0, protein: 30.0, carbs: 40.0, fat: 10.0 },
            Macros { calories: 600.0, protein: 20.0, carbs: 70.0, fat: 22.0 },
        ];
        let total: Macros = entries.into_iter().sum();
        assert_eq!(total.calories, 1000.0);
        assert_eq!(total.protein, 50.0);
    }
}
