//! Exercise entry model
//!
//! One recorded activity. Calories burned are either supplied directly by
//! the user or derived from a MET value, the logged body weight, and the
//! session duration.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::calc::{exercise::met_calories_burned, CalcResult};
use crate::db::DbResult;

/// How an entry's calories-burned figure was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieSource {
    Manual,
    Met,
}

impl CalorieSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalorieSource::Manual => "manual",
            CalorieSource::Met => "met",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "manual" => Some(CalorieSource::Manual),
            "met" => Some(CalorieSource::Met),
            _ => None,
        }
    }
}

/// An exercise entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub id: i64,
    pub day_id: i64,
    pub exercise_name: String,
    pub calories_burned_kcal: i64,
    pub duration_minutes: Option<f64>,
    pub met: Option<f64>,
    pub source: CalorieSource,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for creating a new exercise entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntryCreate {
    pub day_id: i64,
    pub exercise_name: String,
    pub calories_burned_kcal: i64,
    pub duration_minutes: Option<f64>,
    pub met: Option<f64>,
    pub source: CalorieSource,
}

impl ExerciseEntryCreate {
    /// Manual entry: the user supplies the calories-burned figure directly
    pub fn manual(day_id: i64, exercise_name: &str, calories_burned_kcal: i64) -> Self {
        Self {
            day_id,
            exercise_name: exercise_name.to_string(),
            calories_burned_kcal,
            duration_minutes: None,
            met: None,
            source: CalorieSource::Manual,
        }
    }

    /// MET-derived entry: calories are computed from intensity, weight, and duration
    pub fn from_met(
        day_id: i64,
        exercise_name: &str,
        met: f64,
        weight_kg: f64,
        duration_minutes: f64,
    ) -> CalcResult<Self> {
        let calories_burned_kcal = met_calories_burned(met, weight_kg, duration_minutes)?;
        Ok(Self {
            day_id,
            exercise_name: exercise_name.to_string(),
            calories_burned_kcal,
            duration_minutes: Some(duration_minutes),
            met: Some(met),
            source: CalorieSource::Met,
        })
    }
}

impl ExerciseEntry {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let source_str: String = row.get("source")?;
        let source = CalorieSource::from_str(&source_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                format!("unrecognized calorie source: {source_str}").into(),
            )
        })?;

        Ok(Self {
            id: row.get("id")?,
            day_id: row.get("day_id")?,
            exercise_name: row.get("exercise_name")?,
            calories_burned_kcal: row.get("calories_burned")?,
            duration_minutes: row.get("duration_minutes")?,
            met: row.get("met")?,
            source,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Create a new exercise entry
    pub fn create(conn: &Connection, data: &ExerciseEntryCreate) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO exercise_entries
            (day_id, exercise_name, calories_burned, duration_minutes, met, source)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                data.day_id,
                data.exercise_name,
                data.calories_burned_kcal,
                data.duration_minutes,
                data.met,
                data.source.as_str(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// Get an exercise entry by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM exercise_entries WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List exercise entries for a day
    pub fn list_for_day(conn: &Connection, day_id: i64) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM exercise_entries WHERE day_id = ?1 ORDER BY created_at, id",
        )?;
        let entries = stmt
            .query_map([day_id], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Delete an exercise entry
    pub fn delete(conn: &Connection, id: i64) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM exercise_entries WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::CalcError;
    use crate::db::migrations::run_migrations;
    use crate::models::Day;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_manual_entry_stores_supplied_calories() {
        let conn = test_conn();
        let day = Day::get_or_create(&conn, "2026-08-28").unwrap();

        let entry =
            ExerciseEntry::create(&conn, &ExerciseEntryCreate::manual(day.id, "swimming", 300))
                .unwrap();

        assert_eq!(entry.calories_burned_kcal, 300);
        assert_eq!(entry.source, CalorieSource::Manual);
        assert!(entry.met.is_none());
    }

    #[test]
    fn test_met_entry_computes_calories() {
        let conn = test_conn();
        let day = Day::get_or_create(&conn, "2026-08-28").unwrap();

        let data = ExerciseEntryCreate::from_met(day.id, "running", 9.8, 75.0, 45.0).unwrap();
        let entry = ExerciseEntry::create(&conn, &data).unwrap();

        assert_eq!(entry.calories_burned_kcal, 578);
        assert_eq!(entry.source, CalorieSource::Met);
        assert_eq!(entry.met, Some(9.8));
        assert_eq!(entry.duration_minutes, Some(45.0));
    }

    #[test]
    fn test_met_entry_rejects_non_positive_met() {
        let result = ExerciseEntryCreate::from_met(1, "resting", 0.0, 75.0, 45.0);
        assert!(matches!(result, Err(CalcError::InvalidInput(_))));
    }
}
