//! Day model
//!
//! Calendar-day container that scopes food and exercise entries. "Today"
//! always means the entries attached to the current calendar date.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// A calendar-day container for log entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    pub id: i64,
    pub date: String, // ISO date: "2026-08-28"
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Day {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            date: row.get("date")?,
            notes: row.get("notes")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Create a new day
    pub fn create(conn: &Connection, date: &str) -> DbResult<Self> {
        conn.execute("INSERT INTO days (date) VALUES (?1)", params![date])?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// Get a day by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM days WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(day) => Ok(Some(day)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get a day by date
    pub fn get_by_date(conn: &Connection, date: &str) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM days WHERE date = ?1")?;

        let result = stmt.query_row([date], Self::from_row);
        match result {
            Ok(day) => Ok(Some(day)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get or create a day by date
    pub fn get_or_create(conn: &Connection, date: &str) -> DbResult<Self> {
        if let Some(day) = Self::get_by_date(conn, date)? {
            return Ok(day);
        }
        Self::create(conn, date)
    }

    /// List days, most recent first
    pub fn list(conn: &Connection, limit: Option<i64>) -> DbResult<Vec<Self>> {
        let sql = match limit {
            Some(n) => format!("SELECT * FROM days ORDER BY date DESC LIMIT {}", n),
            None => "SELECT * FROM days ORDER BY date DESC".to_string(),
        };

        let mut stmt = conn.prepare(&sql)?;
        let days = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_get_or_create_reuses_existing_day() {
        let conn = test_conn();
        let first = Day::get_or_create(&conn, "2026-08-28").unwrap();
        let second = Day::get_or_create(&conn, "2026-08-28").unwrap();
        assert_eq!(first.id, second.id);

        let other = Day::get_or_create(&conn, "2026-08-29").unwrap();
        assert_ne!(first.id, other.id);
    }

    #[test]
    fn test_list_orders_most_recent_first() {
        let conn = test_conn();
        Day::get_or_create(&conn, "2026-08-27").unwrap();
        Day::get_or_create(&conn, "2026-08-29").unwrap();
        Day::get_or_create(&conn, "2026-08-28").unwrap();

        let days = Day::list(&conn, None).unwrap();
        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2026-08-29", "2026-08-28", "2026-08-27"]);
    }
}
