//! MET-based exercise calorie estimation

use super::error::{CalcError, CalcResult};

/// Resting oxygen uptake in ml/kg/min, the "1 MET" reference
const RESTING_VO2_ML_KG_MIN: f64 = 3.5;

/// Estimate calories burned from a MET value, body weight, and duration.
///
/// `kcal = MET * 3.5 * weight_kg / 200 * minutes`, floored to a whole
/// calorie. Manual entries bypass this and record the figure directly.
pub fn met_calories_burned(met: f64, weight_kg: f64, duration_minutes: f64) -> CalcResult<i64> {
    if !met.is_finite() || met <= 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "MET value must be positive, got {met}"
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "weight must be positive, got {weight_kg} kg"
        )));
    }
    if !duration_minutes.is_finite() || duration_minutes < 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "duration must not be negative, got {duration_minutes} minutes"
        )));
    }

    let kcal = met * RESTING_VO2_ML_KG_MIN * weight_kg / 200.0 * duration_minutes;
    Ok(kcal.floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_run() {
        // 9.8 MET run, 75 kg, 45 min: floor(12.8625 * 45) = 578
        assert_eq!(met_calories_burned(9.8, 75.0, 45.0).unwrap(), 578);
    }

    #[test]
    fn test_zero_duration_burns_nothing() {
        assert_eq!(met_calories_burned(6.0, 80.0, 0.0).unwrap(), 0);
    }

    #[test]
    fn test_rejects_non_positive_met() {
        assert!(matches!(
            met_calories_burned(0.0, 75.0, 30.0),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            met_calories_burned(-2.0, 75.0, 30.0),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_bad_weight_and_duration() {
        assert!(met_calories_burned(6.0, 0.0, 30.0).is_err());
        assert!(met_calories_burned(6.0, 75.0, -10.0).is_err());
        assert!(met_calories_burned(6.0, f64::NAN, 30.0).is_err());
    }
}
