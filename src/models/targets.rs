//! Targets model
//!
//! Cached daily nutrition and hydration goals. A stored row is either
//! derived from the profile or a manual override; manual values stand until
//! an explicit recalculation writes a derived row over them. Rows are always
//! replaced wholesale, never partially merged.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::calc::NutritionTargets;
use crate::db::DbResult;

/// Where the stored targets came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetSource {
    Derived,
    Manual,
}

impl TargetSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetSource::Derived => "derived",
            TargetSource::Manual => "manual",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "derived" => Some(TargetSource::Derived),
            "manual" => Some(TargetSource::Manual),
            _ => None,
        }
    }
}

/// Persisted daily targets (single row table)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Targets {
    pub id: i64,
    pub calories_kcal: i64,
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
    pub water_liters: f64,
    pub source: TargetSource,
    pub created_at: String,
    pub updated_at: String,
}

impl Targets {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let source_str: String = row.get("source")?;
        let source = TargetSource::from_str(&source_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                format!("unrecognized target source: {source_str}").into(),
            )
        })?;

        Ok(Self {
            id: row.get("id")?,
            calories_kcal: row.get("calories_kcal")?,
            protein_g: row.get("protein_g")?,
            carbs_g: row.get("carbs_g")?,
            fat_g: row.get("fat_g")?,
            water_liters: row.get("water_liters")?,
            source,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Get the stored targets (single row table)
    pub fn get(conn: &Connection) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM targets WHERE id = 1")?;

        let result = stmt.query_row([], Self::from_row);
        match result {
            Ok(targets) => Ok(Some(targets)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the stored targets wholesale
    pub fn set(conn: &Connection, values: &NutritionTargets, source: TargetSource) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO targets (id, calories_kcal, protein_g, carbs_g, fat_g, water_liters, source)
            VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                calories_kcal = excluded.calories_kcal,
                protein_g = excluded.protein_g,
                carbs_g = excluded.carbs_g,
                fat_g = excluded.fat_g,
                water_liters = excluded.water_liters,
                source = excluded.source,
                updated_at = datetime('now')
            "#,
            params![
                values.calories_kcal,
                values.protein_g,
                values.carbs_g,
                values.fat_g,
                values.water_liters,
                source.as_str(),
            ],
        )?;

        Self::get(conn)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// Store freshly derived targets, clearing any manual override
    pub fn set_derived(conn: &Connection, values: &NutritionTargets) -> DbResult<Self> {
        Self::set(conn, values, TargetSource::Derived)
    }

    /// Store a manual override; it supersedes derived values until the next
    /// explicit recalculation
    pub fn set_manual(conn: &Connection, values: &NutritionTargets) -> DbResult<Self> {
        Self::set(conn, values, TargetSource::Manual)
    }

    /// The stored values as a calculator-level record
    pub fn values(&self) -> NutritionTargets {
        NutritionTargets {
            calories_kcal: self.calories_kcal,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            water_liters: self.water_liters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn derived_values() -> NutritionTargets {
        NutritionTargets {
            calories_kcal: 2702,
            protein_g: 202,
            carbs_g: 270,
            fat_g: 90,
            water_liters: 2.6,
        }
    }

    #[test]
    fn test_set_and_get() {
        let conn = test_conn();
        assert!(Targets::get(&conn).unwrap().is_none());

        Targets::set_derived(&conn, &derived_values()).unwrap();
        let stored = Targets::get(&conn).unwrap().unwrap();
        assert_eq!(stored.calories_kcal, 2702);
        assert_eq!(stored.source, TargetSource::Derived);
    }

    #[test]
    fn test_manual_override_then_recalculation() {
        let conn = test_conn();
        Targets::set_derived(&conn, &derived_values()).unwrap();

        let manual = NutritionTargets {
            calories_kcal: 2400,
            protein_g: 180,
            carbs_g: 240,
            fat_g: 80,
            water_liters: 3.0,
        };
        let stored = Targets::set_manual(&conn, &manual).unwrap();
        assert_eq!(stored.source, TargetSource::Manual);
        assert_eq!(stored.calories_kcal, 2400);

        // Explicit recalculation replaces the override wholesale
        let stored = Targets::set_derived(&conn, &derived_values()).unwrap();
        assert_eq!(stored.source, TargetSource::Derived);
        assert_eq!(stored.calories_kcal, 2702);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM targets", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
