//! Ideal weight trend projection
//!
//! Projects where the user's weight "should" be on a date given a goal's
//! expected daily rate. Display-only; nothing is enforced against it.

use chrono::NaiveDate;

use crate::models::Goal;

/// Expected weight on `current_date` for a trend line starting at
/// `start_weight_kg` on `start_date`
pub fn projected_weight_kg(
    start_weight_kg: f64,
    start_date: NaiveDate,
    goal: Goal,
    current_date: NaiveDate,
) -> f64 {
    let days_elapsed = (current_date - start_date).num_days() as f64;
    start_weight_kg + days_elapsed * goal.daily_weight_rate_kg()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_cut_loses_half_kilo_per_week() {
        let projected =
            projected_weight_kg(80.0, date("2026-08-01"), Goal::Cut, date("2026-08-11"));
        assert!((projected - 79.3).abs() < 1e-9);
    }

    #[test]
    fn test_maintenance_is_flat() {
        let projected =
            projected_weight_kg(80.0, date("2026-08-01"), Goal::Maintenance, date("2026-12-01"));
        assert_eq!(projected, 80.0);
    }

    #[test]
    fn test_lean_gain_rate() {
        let projected =
            projected_weight_kg(70.0, date("2026-08-01"), Goal::LeanGain, date("2026-08-21"));
        assert!((projected - 70.7).abs() < 1e-9);
    }

    #[test]
    fn test_start_date_projects_start_weight() {
        let d = date("2026-08-01");
        assert_eq!(projected_weight_kg(92.5, d, Goal::Bulk, d), 92.5);
    }
}
