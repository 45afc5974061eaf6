//! Profile model
//!
//! The user's physical and lifestyle attributes, used to derive daily
//! nutrition targets. Stored as a single row; edits overwrite it.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// Gender enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Constant term of the Mifflin-St Jeor equation
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

/// Activity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    SuperActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::SuperActive => "super_active",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "lightly_active" | "light" => Some(ActivityLevel::LightlyActive),
            "moderately_active" | "moderate" => Some(ActivityLevel::ModeratelyActive),
            "very_active" => Some(ActivityLevel::VeryActive),
            "super_active" | "extra_active" => Some(ActivityLevel::SuperActive),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::SuperActive => "Super Active",
        }
    }

    /// Multiplier applied to BMR to estimate total daily energy expenditure
    pub fn tdee_multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
        }
    }

    /// Whether this level qualifies for the extra hydration allowance
    pub fn high_activity(&self) -> bool {
        matches!(self, ActivityLevel::VeryActive | ActivityLevel::SuperActive)
    }
}

/// Goal enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Cut,
    Maintenance,
    LeanGain,
    Bulk,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Cut => "cut",
            Goal::Maintenance => "maintenance",
            Goal::LeanGain => "lean_gain",
            Goal::Bulk => "bulk",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "cut" => Some(Goal::Cut),
            "maintenance" | "maintain" => Some(Goal::Maintenance),
            "lean_gain" => Some(Goal::LeanGain),
            "bulk" => Some(Goal::Bulk),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::Cut => "Cut",
            Goal::Maintenance => "Maintenance",
            Goal::LeanGain => "Lean Gain",
            Goal::Bulk => "Bulk",
        }
    }

    /// Calorie offset applied to TDEE
    pub fn calorie_offset(&self) -> f64 {
        match self {
            Goal::Cut => -500.0,
            Goal::Maintenance => 0.0,
            Goal::LeanGain => 300.0,
            Goal::Bulk => 500.0,
        }
    }

    /// Macro split as percentages of the calorie target (protein, carbs, fat)
    pub fn macro_split(&self) -> MacroSplit {
        match self {
            Goal::Cut => MacroSplit {
                protein_pct: 40.0,
                carbs_pct: 35.0,
                fat_pct: 25.0,
            },
            Goal::Maintenance => MacroSplit {
                protein_pct: 30.0,
                carbs_pct: 40.0,
                fat_pct: 30.0,
            },
            Goal::LeanGain => MacroSplit {
                protein_pct: 25.0,
                carbs_pct: 50.0,
                fat_pct: 25.0,
            },
            Goal::Bulk => MacroSplit {
                protein_pct: 30.0,
                carbs_pct: 50.0,
                fat_pct: 20.0,
            },
        }
    }

    /// Expected daily body-weight change in kg for the weight trend line
    pub fn daily_weight_rate_kg(&self) -> f64 {
        match self {
            Goal::Cut => -0.07,        // ~0.5 kg/week
            Goal::Maintenance => 0.0,
            Goal::LeanGain => 0.035,   // ~0.25 kg/week
            Goal::Bulk => 0.07,        // ~0.5 kg/week
        }
    }
}

/// Percentage-of-calories macro split for a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

/// The user's profile (single row table)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub created_at: String,
    pub updated_at: String,
}

/// Profile field values for creation and edits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Profile {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let gender_str: String = row.get("gender")?;
        let activity_str: String = row.get("activity_level")?;
        let goal_str: String = row.get("goal")?;

        Ok(Self {
            id: row.get("id")?,
            gender: Gender::from_str(&gender_str)
                .ok_or_else(|| text_column_error("gender", &gender_str))?,
            age: row.get("age")?,
            weight_kg: row.get("weight_kg")?,
            height_cm: row.get("height_cm")?,
            activity_level: ActivityLevel::from_str(&activity_str)
                .ok_or_else(|| text_column_error("activity_level", &activity_str))?,
            goal: Goal::from_str(&goal_str)
                .ok_or_else(|| text_column_error("goal", &goal_str))?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Get the profile (single row table)
    pub fn get(conn: &Connection) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM profile WHERE id = 1")?;

        let result = stmt.query_row([], Self::from_row);
        match result {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set or update the profile (upsert)
    pub fn set(conn: &Connection, data: &ProfileData) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO profile (id, gender, age, weight_kg, height_cm, activity_level, goal)
            VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                gender = excluded.gender,
                age = excluded.age,
                weight_kg = excluded.weight_kg,
                height_cm = excluded.height_cm,
                activity_level = excluded.activity_level,
                goal = excluded.goal,
                updated_at = datetime('now')
            "#,
            params![
                data.gender.as_str(),
                data.age,
                data.weight_kg,
                data.height_cm,
                data.activity_level.as_str(),
                data.goal.as_str(),
            ],
        )?;

        Self::get(conn)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }
}

/// Build a rusqlite conversion error for an unrecognized enum value in a text column
fn text_column_error(column: &str, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        format!("unrecognized {column}: {value}").into(),
    )
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

    fn sample_data() -> ProfileData {
        ProfileData {
            gender: Gender::Male,
            age: 21,
            weight_kg: 75.0,
            height_cm: 175.0,
            activity_level: ActivityLevel::ModeratelyActive,
            goal: Goal::Maintenance,
        }
    }

    #[test]
    fn test_enum_round_trips() {
        for level in [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::SuperActive,
        ] {
            assert_eq!(ActivityLevel::from_str(level.as_str()), Some(level));
        }
        for goal in [Goal::Cut, Goal::Maintenance, Goal::LeanGain, Goal::Bulk] {
            assert_eq!(Goal::from_str(goal.as_str()), Some(goal));
        }
        assert_eq!(Gender::from_str("MALE"), Some(Gender::Male));
        assert_eq!(ActivityLevel::from_str("Lightly Active"), Some(ActivityLevel::LightlyActive));
        assert_eq!(Goal::from_str("recomp"), None);
    }

    #[test]
    fn test_set_and_get() {
        let conn = test_conn();
        assert!(Profile::get(&conn).unwrap().is_none());

        let profile = Profile::set(&conn, &sample_data()).unwrap();
        assert_eq!(profile.id, 1);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.age, 21);
        assert_eq!(profile.goal, Goal::Maintenance);
    }

    #[test]
    fn test_set_overwrites_existing_row() {
        let conn = test_conn();
        Profile::set(&conn, &sample_data()).unwrap();

        let mut edited = sample_data();
        edited.weight_kg = 80.0;
        edited.goal = Goal::Cut;
        let profile = Profile::set(&conn, &edited).unwrap();

        assert_eq!(profile.id, 1);
        assert_eq!(profile.weight_kg, 80.0);
        assert_eq!(profile.goal, Goal::Cut);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM profile", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
