//! Weight log model
//!
//! Dated body-weight observations, one per date. Re-logging a date
//! overwrites the earlier observation.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// A dated body-weight observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightLogEntry {
    pub id: i64,
    pub date: String, // ISO date
    pub weight_kg: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl WeightLogEntry {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            date: row.get("date")?,
            weight_kg: row.get("weight_kg")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Log a weight for a date (upsert; last write wins)
    pub fn log(conn: &Connection, date: &str, weight_kg: f64) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO weight_log (date, weight_kg)
            VALUES (?1, ?2)
            ON CONFLICT(date) DO UPDATE SET
                weight_kg = excluded.weight_kg,
                updated_at = datetime('now')
            "#,
            params![date, weight_kg],
        )?;

        Self::get_by_date(conn, date)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// Get the entry for a date
    pub fn get_by_date(conn: &Connection, date: &str) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM weight_log WHERE date = ?1")?;

        let result = stmt.query_row([date], Self::from_row);
        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get the earliest observation (the start of the trend line)
    pub fn earliest(conn: &Connection) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM weight_log ORDER BY date ASC LIMIT 1")?;

        let result = stmt.query_row([], Self::from_row);
        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get the most recent observation
    pub fn latest(conn: &Connection) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM weight_log ORDER BY date DESC LIMIT 1")?;

        let result = stmt.query_row([], Self::from_row);
        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List observations in date order
    pub fn list(conn: &Connection, limit: Option<i64>) -> DbResult<Vec<Self>> {
        let sql = match limit {
            Some(n) => format!("SELECT * FROM weight_log ORDER BY date ASC LIMIT {}", n),
            None => "SELECT * FROM weight_log ORDER BY date ASC".to_string(),
        };

        let mut stmt = conn.prepare(&sql)?;
        let entries = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Delete the entry for a date
    pub fn delete_by_date(conn: &Connection, date: &str) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM weight_log WHERE date = ?1", [date])?;
        Ok(rows > 0)
    }
}
