//! macroplan library
//!
//! Nutrition target and energy balance tracking: derives daily calorie,
//! macro, and hydration targets from a user profile and measures logged
//! food and exercise against them.

pub mod build_info;
pub mod calc;
pub mod db;
pub mod models;
pub mod tools;
