//! Database migrations
//!
//! Schema creation and migration logic.

use rusqlite::Connection;

use super::connection::DbResult;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all migrations to bring the database up to the current schema version
pub fn run_migrations(conn: &Connection) -> DbResult<()> {
    // Create migrations table if it doesn't exist
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    // Get current version
    let current_version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    // Run migrations
    if current_version < 1 {
        migrate_v1(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (1)", [])?;
        tracing::info!("applied schema migration v1");
    }

    Ok(())
}

/// Migration v1: Initial schema
fn migrate_v1(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        -- ============================================
        -- PROFILE
        -- The user's physical and lifestyle attributes (single row)
        -- ============================================
        CREATE TABLE profile (
            id INTEGER PRIMARY KEY CHECK(id = 1),
            gender TEXT NOT NULL CHECK(gender IN ('male', 'female')),
            age INTEGER NOT NULL CHECK(age > 0),
            weight_kg REAL NOT NULL CHECK(weight_kg > 0),
            height_cm REAL NOT NULL CHECK(height_cm > 0),
            activity_level TEXT NOT NULL CHECK(activity_level IN
                ('sedentary', 'lightly_active', 'moderately_active', 'very_active', 'super_active')),
            goal TEXT NOT NULL CHECK(goal IN ('cut', 'maintenance', 'lean_gain', 'bulk')),

            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- ============================================
        -- TARGETS
        -- Cached daily goals, overwritten wholesale on recalculation (single row)
        -- ============================================
        CREATE TABLE targets (
            id INTEGER PRIMARY KEY CHECK(id = 1),
            calories_kcal INTEGER NOT NULL,
            protein_g INTEGER NOT NULL,
            carbs_g INTEGER NOT NULL,
            fat_g INTEGER NOT NULL,
            water_liters REAL NOT NULL,

            -- 'derived' rows come from the calculator; 'manual' rows are user overrides
            source TEXT NOT NULL DEFAULT 'derived' CHECK(source IN ('derived', 'manual')),

            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- ============================================
        -- DAYS
        -- Calendar-day container for food and exercise entries
        -- ============================================
        CREATE TABLE days (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL UNIQUE,           -- ISO date: "2026-08-28"
            notes TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE UNIQUE INDEX idx_days_date ON days(date);

        -- ============================================
        -- FOOD ENTRIES
        -- One recorded consumption event, scaled from per-100g values
        -- ============================================
        CREATE TABLE food_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            day_id INTEGER NOT NULL REFERENCES days(id) ON DELETE CASCADE,
            meal TEXT NOT NULL CHECK(meal IN ('breakfast', 'lunch', 'dinner', 'snacks')),
            food_name TEXT NOT NULL,
            grams_consumed REAL NOT NULL CHECK(grams_consumed > 0),

            -- Consumed nutrition, computed at creation as per100g * grams / 100
            calories REAL NOT NULL DEFAULT 0,
            protein REAL NOT NULL DEFAULT 0,     -- grams
            carbs REAL NOT NULL DEFAULT 0,       -- grams
            fat REAL NOT NULL DEFAULT 0,         -- grams

            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX idx_food_entries_day ON food_entries(day_id);
        CREATE INDEX idx_food_entries_meal ON food_entries(meal);

        -- ============================================
        -- EXERCISE ENTRIES
        -- One recorded activity, calories either manual or MET-derived
        -- ============================================
        CREATE TABLE exercise_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            day_id INTEGER NOT NULL REFERENCES days(id) ON DELETE CASCADE,
            exercise_name TEXT NOT NULL,
            calories_burned INTEGER NOT NULL CHECK(calories_burned >= 0),

            -- Retained for MET-derived entries so they can be recalculated
            duration_minutes REAL,
            met REAL,
            source TEXT NOT NULL CHECK(source IN ('manual', 'met')),

            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX idx_exercise_entries_day ON exercise_entries(day_id);

        -- ============================================
        -- WEIGHT LOG
        -- Dated body-weight observations, one per date (re-log overwrites)
        -- ============================================
        CREATE TABLE weight_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL UNIQUE,           -- ISO date
            weight_kg REAL NOT NULL CHECK(weight_kg > 0),
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE UNIQUE INDEX idx_weight_log_date ON weight_log(date);
        "#,
    )?;

    Ok(())
}

/// Get the current schema version
pub fn get_schema_version(conn: &Connection) -> DbResult<i32> {
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);
    Ok(version)
}

/// Check if the database needs migration
pub fn needs_migration(conn: &Connection) -> DbResult<bool> {
    let current = get_schema_version(conn)?;
    Ok(current < SCHEMA_VERSION)
}
