//! Energy and macro balance
//!
//! Aggregates a day's food and exercise entries against the stored targets.
//! Pure sums and differences: order-independent, no clamping.

use serde::{Deserialize, Serialize};

use crate::models::{ExerciseEntry, FoodEntry, Macros};

use super::targets::NutritionTargets;

/// Per-macro gram totals or remainders
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Running energy and macro balance for a day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub total_food_kcal: f64,
    pub total_burned_kcal: f64,
    /// Food minus exercise
    pub net_kcal: f64,
    /// Target minus net; negative means over budget, which is a normal
    /// outcome and is reported as-is
    pub remaining_kcal: f64,
    pub macro_totals: MacroTotals,
    pub macro_remaining: MacroTotals,
}

/// Compute the energy and macro balance for a set of entries
pub fn energy_balance(
    food_entries: &[FoodEntry],
    exercise_entries: &[ExerciseEntry],
    targets: &NutritionTargets,
) -> Balance {
    let consumed: Macros = food_entries.iter().map(|e| e.nutrition).sum();
    let total_burned_kcal: f64 = exercise_entries
        .iter()
        .map(|e| e.calories_burned_kcal as f64)
        .sum();

    let net_kcal = consumed.calories - total_burned_kcal;

    Balance {
        total_food_kcal: consumed.calories,
        total_burned_kcal,
        net_kcal,
        remaining_kcal: targets.calories_kcal as f64 - net_kcal,
        macro_totals: MacroTotals {
            protein_g: consumed.protein,
            carbs_g: consumed.carbs,
            fat_g: consumed.fat,
        },
        macro_remaining: MacroTotals {
            protein_g: targets.protein_g as f64 - consumed.protein,
            carbs_g: targets.carbs_g as f64 - consumed.carbs,
            fat_g: targets.fat_g as f64 - consumed.fat,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalorieSource, Meal};

    fn food(calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodEntry {
        FoodEntry {
            id: 0,
            day_id: 1,
            meal: Meal::Lunch,
            food_name: "test food".to_string(),
            grams_consumed: 100.0,
            nutrition: Macros {
                calories,
                protein,
                carbs,
                fat,
            },
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn exercise(calories_burned_kcal: i64) -> ExerciseEntry {
        ExerciseEntry {
            id: 0,
            day_id: 1,
            exercise_name: "test exercise".to_string(),
            calories_burned_kcal,
            duration_minutes: None,
            met: None,
            source: CalorieSource::Manual,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn targets() -> NutritionTargets {
        NutritionTargets {
            calories_kcal: 2500,
            protein_g: 190,
            carbs_g: 250,
            fat_g: 83,
            water_liters: 2.8,
        }
    }

    #[test]
    fn test_reference_balance() {
        let food_entries = vec![food(400.0, 30.0, 40.0, 10.0), food(600.0, 20.0, 70.0, 22.0)];
        let exercise_entries = vec![exercise(300)];

        let balance = energy_balance(&food_entries, &exercise_entries, &targets());
        assert_eq!(balance.total_food_kcal, 1000.0);
        assert_eq!(balance.total_burned_kcal, 300.0);
        assert_eq!(balance.net_kcal, 700.0);
        assert_eq!(balance.remaining_kcal, 1800.0);
        assert_eq!(balance.macro_totals.protein_g, 50.0);
        assert_eq!(balance.macro_remaining.protein_g, 140.0);
    }

    #[test]
    fn test_order_independent() {
        let mut food_entries = vec![
            food(400.0, 30.0, 40.0, 10.0),
            food(600.0, 20.0, 70.0, 22.0),
            food(150.0, 5.0, 20.0, 6.0),
        ];
        let mut exercise_entries = vec![exercise(300), exercise(120)];

        let forward = energy_balance(&food_entries, &exercise_entries, &targets());
        food_entries.reverse();
        exercise_entries.reverse();
        let reversed = energy_balance(&food_entries, &exercise_entries, &targets());

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_over_budget_remaining_is_negative() {
        let food_entries = vec![food(3100.0, 120.0, 380.0, 110.0)];
        let balance = energy_balance(&food_entries, &[], &targets());

        assert_eq!(balance.remaining_kcal, -600.0);
        assert!(balance.macro_remaining.fat_g < 0.0);
    }

    #[test]
    fn test_empty_day() {
        let balance = energy_balance(&[], &[], &targets());
        assert_eq!(balance.net_kcal, 0.0);
        assert_eq!(balance.remaining_kcal, 2500.0);
        assert_eq!(balance.macro_totals, MacroTotals::default());
    }
}
