//! Calculation module
//!
//! The pure nutrition-target and energy-balance calculator. Every function
//! here is deterministic, side-effect free, and validates its inputs
//! eagerly; persistence and presentation live elsewhere.

pub mod balance;
pub mod error;
pub mod exercise;
pub mod targets;
pub mod trend;

pub use balance::{energy_balance, Balance, MacroTotals};
pub use error::{CalcError, CalcResult};
pub use exercise::met_calories_burned;
pub use targets::{derive_targets, water_target_liters, NutritionTargets};
pub use trend::projected_weight_kg;
