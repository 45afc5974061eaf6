//! Food entry model
//!
//! One recorded consumption event. Nutrition is scaled from per-100g values
//! at creation time and cached on the row.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use super::Macros;

/// Meal enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Meal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::Snacks => "snacks",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(Meal::Breakfast),
            "lunch" => Some(Meal::Lunch),
            "dinner" => Some(Meal::Dinner),
            "snacks" | "snack" => Some(Meal::Snacks),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
            Meal::Snacks => "Snacks",
        }
    }
}

/// Nutrient values per 100 g, as reported by an external food source.
/// Fields a source does not report default to zero when the entry is created.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Per100g {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl Per100g {
    /// Resolve missing fields to zero
    pub fn resolve(&self) -> Macros {
        Macros {
            calories: self.calories.unwrap_or(0.0),
            protein: self.protein.unwrap_or(0.0),
            carbs: self.carbs.unwrap_or(0.0),
            fat: self.fat.unwrap_or(0.0),
        }
    }
}

/// A food entry representing consumed food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: i64,
    pub day_id: i64,
    pub meal: Meal,
    pub food_name: String,
    pub grams_consumed: f64,
    pub nutrition: Macros,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for creating a new food entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntryCreate {
    pub day_id: i64,
    pub meal: Meal,
    pub food_name: String,
    pub grams_consumed: f64,
    pub per_100g: Per100g,
}

/// Data for editing a food entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodEntryUpdate {
    pub meal: Option<Meal>,
    pub food_name: Option<String>,
    pub grams_consumed: Option<f64>,
}

impl FoodEntry {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let meal_str: String = row.get("meal")?;
        let meal = Meal::from_str(&meal_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                format!("unrecognized meal: {meal_str}").into(),
            )
        })?;

        Ok(Self {
            id: row.get("id")?,
            day_id: row.get("day_id")?,
            meal,
            food_name: row.get("food_name")?,
            grams_consumed: row.get("grams_consumed")?,
            nutrition: Macros {
                calories: row.get("calories")?,
                protein: row.get("protein")?,
                carbs: row.get("carbs")?,
                fat: row.get("fat")?,
            },
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Create a new food entry, scaling per-100g nutrition by grams consumed
    pub fn create(conn: &Connection, data: &FoodEntryCreate) -> DbResult<Self> {
        let nutrition = data.per_100g.resolve().scale(data.grams_consumed / 100.0);

        conn.execute(
            r#"
            INSERT INTO food_entries
            (day_id, meal, food_name, grams_consumed, calories, protein, carbs, fat)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                data.day_id,
                data.meal.as_str(),
                data.food_name,
                data.grams_consumed,
                nutrition.calories,
                nutrition.protein,
                nutrition.carbs,
                nutrition.fat,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// Get a food entry by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM food_entries WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List food entries for a day
    pub fn list_for_day(conn: &Connection, day_id: i64) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM food_entries WHERE day_id = ?1 ORDER BY created_at, id",
        )?;
        let entries = stmt
            .query_map([day_id], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Edit a food entry. Changing grams rescales the cached nutrition from
    /// the previous values, so the per-100g basis is preserved.
    pub fn update(conn: &Connection, id: i64, data: &FoodEntryUpdate) -> DbResult<Option<Self>> {
        let current = match Self::get_by_id(conn, id)? {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let meal = data.meal.unwrap_or(current.meal);
        let food_name = data.food_name.clone().unwrap_or(current.food_name);
        let grams = data.grams_consumed.unwrap_or(current.grams_consumed);
        let nutrition = current
            .nutrition
            .scale(grams / current.grams_consumed);

        conn.execute(
            r#"
            UPDATE food_entries
            SET meal = ?1,
                food_name = ?2,
                grams_consumed = ?3,
                calories = ?4,
                protein = ?5,
                carbs = ?6,
                fat = ?7,
                updated_at = datetime('now')
            WHERE id = ?8
            "#,
            params![
                meal.as_str(),
                food_name,
                grams,
                nutrition.calories,
                nutrition.protein,
                nutrition.carbs,
                nutrition.fat,
                id,
            ],
        )?;

        Self::get_by_id(conn, id)
    }

    /// Delete a food entry
    pub fn delete(conn: &Connection, id: i64) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM food_entries WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }
}
