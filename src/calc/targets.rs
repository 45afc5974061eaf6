//! Daily target derivation
//!
//! Maps a profile to calorie, macro, and hydration targets using the
//! Mifflin-St Jeor equation, fixed activity multipliers, and a per-goal
//! calorie offset and macro split.

use serde::{Deserialize, Serialize};

use crate::models::{ActivityLevel, Profile};

use super::error::{CalcError, CalcResult};

// ============================================================================
// Constants
// ============================================================================

/// Plausible age range in years
pub const MIN_AGE_YEARS: u32 = 10;
pub const MAX_AGE_YEARS: u32 = 100;

/// Plausible body mass range in kilograms
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 250.0;

/// Plausible height range in centimeters
pub const MIN_HEIGHT_CM: f64 = 100.0;
pub const MAX_HEIGHT_CM: f64 = 250.0;

/// Energy density of protein (kcal per gram)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Energy density of carbohydrate (kcal per gram)
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Energy density of fat (kcal per gram)
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Baseline water intake in liters per kilogram of body mass
pub const WATER_LITERS_PER_KG: f64 = 0.035;
/// Extra daily water in liters for very or super active profiles
pub const HIGH_ACTIVITY_WATER_BONUS: f64 = 0.75;

// ============================================================================
// Types
// ============================================================================

/// Derived daily nutrition and hydration targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub calories_kcal: i64,
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
    /// Liters, one decimal place
    pub water_liters: f64,
}

// ============================================================================
// Derivation
// ============================================================================

/// Validate a profile's numeric fields against their plausible ranges
pub fn validate_profile(profile: &Profile) -> CalcResult<()> {
    if profile.age < MIN_AGE_YEARS || profile.age > MAX_AGE_YEARS {
        return Err(CalcError::InvalidProfile(format!(
            "age must be between {} and {} years, got {}",
            MIN_AGE_YEARS, MAX_AGE_YEARS, profile.age
        )));
    }
    if !profile.weight_kg.is_finite()
        || profile.weight_kg < MIN_WEIGHT_KG
        || profile.weight_kg > MAX_WEIGHT_KG
    {
        return Err(CalcError::InvalidProfile(format!(
            "weight must be between {} and {} kg, got {}",
            MIN_WEIGHT_KG, MAX_WEIGHT_KG, profile.weight_kg
        )));
    }
    if !profile.height_cm.is_finite()
        || profile.height_cm < MIN_HEIGHT_CM
        || profile.height_cm > MAX_HEIGHT_CM
    {
        return Err(CalcError::InvalidProfile(format!(
            "height must be between {} and {} cm, got {}",
            MIN_HEIGHT_CM, MAX_HEIGHT_CM, profile.height_cm
        )));
    }
    Ok(())
}

/// Basal metabolic rate via the Mifflin-St Jeor equation
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age)
        + profile.gender.bmr_offset()
}

/// Derive daily targets from a profile.
///
/// Calorie and macro amounts truncate toward zero rather than round, so the
/// stored targets never overstate the energy budget.
pub fn derive_targets(profile: &Profile) -> CalcResult<NutritionTargets> {
    validate_profile(profile)?;

    let bmr = basal_metabolic_rate(profile);
    let tdee = bmr * profile.activity_level.tdee_multiplier();
    let calories_kcal = (tdee + profile.goal.calorie_offset()).trunc() as i64;

    let split = profile.goal.macro_split();

    Ok(NutritionTargets {
        calories_kcal,
        protein_g: macro_grams(calories_kcal, split.protein_pct, KCAL_PER_G_PROTEIN),
        carbs_g: macro_grams(calories_kcal, split.carbs_pct, KCAL_PER_G_CARBS),
        fat_g: macro_grams(calories_kcal, split.fat_pct, KCAL_PER_G_FAT),
        water_liters: water_target_liters(profile.weight_kg, profile.activity_level),
    })
}

/// Gram allotment for one macro, truncated toward zero
fn macro_grams(calories_kcal: i64, pct: f64, kcal_per_gram: f64) -> i64 {
    (calories_kcal as f64 * pct / 100.0 / kcal_per_gram) as i64
}

/// Daily water target in liters, rounded to one decimal place.
/// Very and super active profiles get an extra allowance.
pub fn water_target_liters(weight_kg: f64, activity_level: ActivityLevel) -> f64 {
    let bonus = if activity_level.high_activity() {
        HIGH_ACTIVITY_WATER_BONUS
    } else {
        0.0
    };
    ((weight_kg * WATER_LITERS_PER_KG + bonus) * 10.0).round() / 10.0
}
