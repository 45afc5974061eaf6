//! Data models
//!
//! Rust structs representing database entities.

mod day;
mod exercise_entry;
mod food_entry;
mod macros;
mod profile;
mod targets;
mod weight_entry;

pub use day::Day;
pub use exercise_entry::{CalorieSource, ExerciseEntry, ExerciseEntryCreate};
pub use food_entry::{FoodEntry, FoodEntryCreate, FoodEntryUpdate, Meal, Per100g};
pub use macros::Macros;
pub use profile::{ActivityLevel, Gender, Goal, MacroSplit, Profile, ProfileData};
pub use targets::{TargetSource, Targets};
pub use weight_entry::WeightLogEntry;
