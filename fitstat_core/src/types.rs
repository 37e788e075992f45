//! Core domain types for the fitstat system.
//!
//! This module defines the workout record variants and the per-kind
//! statistics formulas:
//! - Distance covered (km)
//! - Mean speed (km/h)
//! - Calories burned (kcal)

use crate::{Error, Result};

// ============================================================================
// Formula Constants
// ============================================================================

/// Metres per kilometre
const M_IN_KM: f64 = 1000.0;

/// Minutes per hour (durations arrive in hours, calorie formulas want minutes)
const MIN_IN_H: f64 = 60.0;

/// Assumed stride length in metres (running and walking)
const STEP_LENGTH_M: f64 = 0.65;

/// Assumed stroke length in metres (swimming)
const STROKE_LENGTH_M: f64 = 1.38;

// Running calorie coefficients
const RUN_SPEED_FACTOR: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

// Walking calorie coefficients
const WALK_WEIGHT_FACTOR: f64 = 0.035;
const WALK_HEIGHT_FACTOR: f64 = 0.029;

// Swimming calorie coefficients
const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_FACTOR: f64 = 2.0;

// ============================================================================
// Workout Record
// ============================================================================

/// A single recorded workout, one variant per supported kind.
///
/// Common fields: `action` is the number of movement units performed
/// (steps for running/walking, strokes for swimming), `duration_h` is the
/// workout length in hours, `weight_kg` is the athlete's weight.
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
    },
    Walking {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: f64,
    },
}

impl Workout {
    /// Human-readable name of the workout kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Workout::Running { .. } => "Running",
            Workout::Walking { .. } => "Walking",
            Workout::Swimming { .. } => "Swimming",
        }
    }

    fn action(&self) -> u32 {
        match self {
            Workout::Running { action, .. }
            | Workout::Walking { action, .. }
            | Workout::Swimming { action, .. } => *action,
        }
    }

    /// Workout duration in hours
    pub fn duration_h(&self) -> f64 {
        match self {
            Workout::Running { duration_h, .. }
            | Workout::Walking { duration_h, .. }
            | Workout::Swimming { duration_h, .. } => *duration_h,
        }
    }

    fn weight_kg(&self) -> f64 {
        match self {
            Workout::Running { weight_kg, .. }
            | Workout::Walking { weight_kg, .. }
            | Workout::Swimming { weight_kg, .. } => *weight_kg,
        }
    }

    /// Distance travelled per movement unit, in metres
    fn action_length_m(&self) -> f64 {
        match self {
            Workout::Running { .. } | Workout::Walking { .. } => STEP_LENGTH_M,
            Workout::Swimming { .. } => STROKE_LENGTH_M,
        }
    }

    /// Distance covered over the whole workout, in kilometres
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.action_length_m() / M_IN_KM
    }

    /// Mean speed over the whole workout, in km/h
    ///
    /// Swimming derives speed from pool geometry (length x laps) rather
    /// than from stroke count, so lap turns don't skew the figure.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Swimming {
                duration_h,
                pool_length_m,
                lap_count,
                ..
            } => pool_length_m * lap_count / M_IN_KM / duration_h,
            _ => self.distance_km() / self.duration_h(),
        }
    }

    /// Calories burned over the whole workout, in kcal
    pub fn spent_calories(&self) -> f64 {
        let weight = self.weight_kg();
        match self {
            Workout::Running { duration_h, .. } => {
                (RUN_SPEED_FACTOR * self.mean_speed_kmh() - RUN_SPEED_SHIFT) * weight / M_IN_KM
                    * (duration_h * MIN_IN_H)
            }
            Workout::Walking {
                duration_h,
                height_cm,
                ..
            } => {
                // The height term counts whole multiples only; the
                // fractional remainder is discarded.
                let height_term = (self.distance_km().powi(2) / height_cm).floor();
                (WALK_WEIGHT_FACTOR * weight + height_term * WALK_HEIGHT_FACTOR * weight)
                    * (duration_h * MIN_IN_H)
            }
            Workout::Swimming { .. } => {
                (self.mean_speed_kmh() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_FACTOR * weight
            }
        }
    }

    /// Check the domain invariants for this record
    ///
    /// Duration, weight, height, pool length and lap count must all be
    /// strictly positive. Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        require_positive("duration", self.duration_h())?;
        require_positive("weight", self.weight_kg())?;

        match self {
            Workout::Walking { height_cm, .. } => require_positive("height", *height_cm)?,
            Workout::Swimming {
                pool_length_m,
                lap_count,
                ..
            } => {
                require_positive("pool length", *pool_length_m)?;
                require_positive("lap count", *lap_count)?;
            }
            Workout::Running { .. } => {}
        }

        Ok(())
    }

    /// Compute the derived statistics for this workout
    pub fn summary(&self) -> crate::TrainingSummary {
        crate::TrainingSummary {
            training_type: self.kind_name().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            avg_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "{} must be positive, got {}",
            field, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn canonical_run() -> Workout {
        Workout::Running {
            action: 15_000,
            duration_h: 1.0,
            weight_kg: 75.0,
        }
    }

    fn canonical_walk() -> Workout {
        Workout::Walking {
            action: 9_000,
            duration_h: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        }
    }

    fn canonical_swim() -> Workout {
        Workout::Swimming {
            action: 720,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            lap_count: 40.0,
        }
    }

    #[test]
    fn test_running_distance_and_speed() {
        let run = canonical_run();
        assert!((run.distance_km() - 9.75).abs() < TOLERANCE);
        assert!((run.mean_speed_kmh() - 9.75).abs() < TOLERANCE);
    }

    #[test]
    fn test_running_calories_closed_form() {
        let run = canonical_run();
        // (18 * 9.75 - 20) * 75 / 1000 * (1 * 60) = 699.75
        let expected = (18.0 * 9.75 - 20.0) * 75.0 / 1000.0 * 60.0;
        assert!((run.spent_calories() - expected).abs() < TOLERANCE);
        assert!((run.spent_calories() - 699.75).abs() < TOLERANCE);
    }

    #[test]
    fn test_swimming_speed_uses_pool_geometry() {
        let swim = canonical_swim();
        // 25 * 40 / 1000 / 1 = 1.0 km/h, not stroke distance / duration
        assert!((swim.mean_speed_kmh() - 1.0).abs() < TOLERANCE);

        let stroke_based = swim.distance_km() / swim.duration_h();
        assert!((stroke_based - 0.9936).abs() < TOLERANCE);
        assert!((swim.mean_speed_kmh() - stroke_based).abs() > 1e-3);
    }

    #[test]
    fn test_swimming_calories() {
        let swim = canonical_swim();
        // (1.0 + 1.1) * 2 * 80 = 336.0
        assert!((swim.spent_calories() - 336.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_walking_calories_height_term_floors_to_zero() {
        let walk = canonical_walk();
        // distance = 5.85 km, 5.85^2 / 180 = 0.190125 floors to 0,
        // so only the base weight term remains: 0.035 * 75 * 60 = 157.5
        assert!((walk.spent_calories() - 157.5).abs() < TOLERANCE);

        // True division would have added a nonzero height contribution
        let true_division = (0.035 * 75.0
            + (walk.distance_km().powi(2) / 180.0) * 0.029 * 75.0)
            * 60.0;
        assert!((true_division - walk.spent_calories()).abs() > 1.0);
    }

    #[test]
    fn test_walking_calories_height_term_floors_to_one() {
        // distance = 1.95 km, 1.95^2 / 3 = 1.2675 floors to 1
        let walk = Workout::Walking {
            action: 3_000,
            duration_h: 1.0,
            weight_kg: 70.0,
            height_cm: 3.0,
        };
        let expected = (0.035 * 70.0 + 1.0 * 0.029 * 70.0) * 60.0;
        assert!((walk.spent_calories() - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(canonical_run().kind_name(), "Running");
        assert_eq!(canonical_walk().kind_name(), "Walking");
        assert_eq!(canonical_swim().kind_name(), "Swimming");
    }

    #[test]
    fn test_validate_accepts_canonical_records() {
        assert!(canonical_run().validate().is_ok());
        assert!(canonical_walk().validate().is_ok());
        assert!(canonical_swim().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let run = Workout::Running {
            action: 100,
            duration_h: 0.0,
            weight_kg: 75.0,
        };
        let err = run.validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("duration"));
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let swim = Workout::Swimming {
            action: 720,
            duration_h: 1.0,
            weight_kg: -80.0,
            pool_length_m: 25.0,
            lap_count: 40.0,
        };
        assert!(swim.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_pool_length() {
        let swim = Workout::Swimming {
            action: 720,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 0.0,
            lap_count: 40.0,
        };
        let err = swim.validate().unwrap_err();
        assert!(err.to_string().contains("pool length"));
    }

    #[test]
    fn test_validate_rejects_zero_height() {
        let walk = Workout::Walking {
            action: 9_000,
            duration_h: 1.0,
            weight_kg: 75.0,
            height_cm: 0.0,
        };
        assert!(walk.validate().is_err());
    }

    #[test]
    fn test_summary_carries_all_fields() {
        let summary = canonical_run().summary();
        assert_eq!(summary.training_type, "Running");
        assert!((summary.duration_h - 1.0).abs() < TOLERANCE);
        assert!((summary.distance_km - 9.75).abs() < TOLERANCE);
        assert!((summary.avg_speed_kmh - 9.75).abs() < TOLERANCE);
        assert!((summary.calories_kcal - 699.75).abs() < TOLERANCE);
    }
}
