//! Daily dashboard summary
//!
//! Composes the profile, stored targets, and a day's log entries into one
//! serializable response. This layer owns the storage wiring; the
//! calculator functions it calls stay pure.

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;
use thiserror::Error;

use crate::calc::{self, Balance, NutritionTargets};
use crate::db::DbError;
use crate::models::{Day, ExerciseEntry, FoodEntry, Meal, Profile, TargetSource, Targets, WeightLogEntry};

/// Summary error types
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Calc(#[from] calc::CalcError),

    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("No profile has been set")]
    MissingProfile,
}

/// Calories consumed per meal
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MealBreakdown {
    pub breakfast_kcal: f64,
    pub lunch_kcal: f64,
    pub dinner_kcal: f64,
    pub snacks_kcal: f64,
}

/// The full dashboard summary for one calendar day
#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub targets: NutritionTargets,
    /// Whether the targets are derived or a manual override
    pub target_source: TargetSource,
    pub balance: Balance,
    pub meals: MealBreakdown,
    pub food_entry_count: usize,
    pub exercise_entry_count: usize,
    pub latest_weight_kg: Option<f64>,
    /// Where the goal's trend line puts the weight on this date, anchored at
    /// the earliest logged observation
    pub projected_weight_kg: Option<f64>,
}

/// Build the dashboard summary for a date.
///
/// Uses the stored targets when present; otherwise derives them from the
/// profile on the fly without persisting.
pub fn day_summary(conn: &Connection, date: &str) -> Result<DaySummary, SummaryError> {
    let profile = Profile::get(conn)?.ok_or(SummaryError::MissingProfile)?;

    let (targets, target_source) = match Targets::get(conn)? {
        Some(stored) => (stored.values(), stored.source),
        None => (calc::derive_targets(&profile)?, TargetSource::Derived),
    };

    let (food_entries, exercise_entries) = match Day::get_by_date(conn, date)? {
        Some(day) => (
            FoodEntry::list_for_day(conn, day.id)?,
            ExerciseEntry::list_for_day(conn, day.id)?,
        ),
        None => (Vec::new(), Vec::new()),
    };

    let balance = calc::energy_balance(&food_entries, &exercise_entries, &targets);
    let meals = meal_breakdown(&food_entries);

    let latest_weight_kg = WeightLogEntry::latest(conn)?.map(|w| w.weight_kg);
    let projected_weight_kg = match WeightLogEntry::earliest(conn)? {
        Some(start) => {
            let start_date = NaiveDate::parse_from_str(&start.date, "%Y-%m-%d")?;
            let current_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
            Some(calc::projected_weight_kg(
                start.weight_kg,
                start_date,
                profile.goal,
                current_date,
            ))
        }
        None => None,
    };

    Ok(DaySummary {
        date: date.to_string(),
        targets,
        target_source,
        balance,
        meals,
        food_entry_count: food_entries.len(),
        exercise_entry_count: exercise_entries.len(),
        latest_weight_kg,
        projected_weight_kg,
    })
}

/// Sum consumed calories per meal
fn meal_breakdown(food_entries: &[FoodEntry]) -> MealBreakdown {
    let mut breakdown = MealBreakdown::default();
    for entry in food_entries {
        let slot = match entry.meal {
            Meal::Breakfast => &mut breakdown.breakfast_kcal,
            Meal::Lunch => &mut breakdown.lunch_kcal,
            Meal::Dinner => &mut breakdown.dinner_kcal,
            Meal::Snacks => &mut breakdown.snacks_kcal,
        };
        *slot += entry.nutrition.calories;
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::models::{
        ActivityLevel, ExerciseEntryCreate, FoodEntryCreate, Gender, Goal, Per100g, ProfileData,
    };

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn seed_profile(conn: &Connection) -> Profile {
        Profile::set(
            conn,
            &ProfileData {
                gender: Gender::Male,
                age: 21,
                weight_kg: 75.0,
                height_cm: 175.0,
                activity_level: ActivityLevel::ModeratelyActive,
                goal: Goal::Maintenance,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_missing_profile_is_an_error() {
        let conn = test_conn();
        assert!(matches!(
            day_summary(&conn, "2026-08-28"),
            Err(SummaryError::MissingProfile)
        ));
    }

    #[test]
    fn test_summary_derives_targets_when_none_stored() {
        let conn = test_conn();
        seed_profile(&conn);

        let summary = day_summary(&conn, "2026-08-28").unwrap();
        assert_eq!(summary.targets.calories_kcal, 2702);
        assert_eq!(summary.target_source, TargetSource::Derived);
        assert_eq!(summary.balance.remaining_kcal, 2702.0);
        assert_eq!(summary.food_entry_count, 0);
    }

    #[test]
    fn test_summary_prefers_stored_manual_targets() {
        let conn = test_conn();
        seed_profile(&conn);
        Targets::set_manual(
            &conn,
            &NutritionTargets {
                calories_kcal: 2400,
                protein_g: 180,
                carbs_g: 240,
                fat_g: 80,
                water_liters: 3.0,
            },
        )
        .unwrap();

        let summary = day_summary(&conn, "2026-08-28").unwrap();
        assert_eq!(summary.targets.calories_kcal, 2400);
        assert_eq!(summary.target_source, TargetSource::Manual);
    }

    #[test]
    fn test_summary_aggregates_entries_for_the_day() {
        let conn = test_conn();
        seed_profile(&conn);
        let day = Day::get_or_create(&conn, "2026-08-28").unwrap();

        FoodEntry::create(
            &conn,
            &FoodEntryCreate {
                day_id: day.id,
                meal: Meal::Breakfast,
                food_name: "oats".to_string(),
                grams_consumed: 100.0,
                per_100g: Per100g {
                    calories: Some(400.0),
                    protein: Some(13.0),
                    carbs: Some(68.0),
                    fat: Some(7.0),
                },
            },
        )
        .unwrap();
        ExerciseEntry::create(&conn, &ExerciseEntryCreate::manual(day.id, "rowing", 250))
            .unwrap();

        let summary = day_summary(&conn, "2026-08-28").unwrap();
        assert_eq!(summary.balance.total_food_kcal, 400.0);
        assert_eq!(summary.balance.total_burned_kcal, 250.0);
        assert_eq!(summary.balance.net_kcal, 150.0);
        assert_eq!(summary.meals.breakfast_kcal, 400.0);
        assert_eq!(summary.meals.dinner_kcal, 0.0);
        assert_eq!(summary.exercise_entry_count, 1);
    }

    #[test]
    fn test_weight_trend_fields() {
        let conn = test_conn();
        seed_profile(&conn);
        WeightLogEntry::log(&conn, "2026-08-18", 80.0).unwrap();
        WeightLogEntry::log(&conn, "2026-08-27", 79.2).unwrap();

        let summary = day_summary(&conn, "2026-08-28").unwrap();
        assert_eq!(summary.latest_weight_kg, Some(79.2));
        // Maintenance goal: trend line stays at the starting weight
        assert_eq!(summary.projected_weight_kg, Some(80.0));
    }
}
