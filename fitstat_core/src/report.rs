//! Human-readable training summaries.

use serde::Serialize;
use std::fmt;

/// Derived statistics for one completed workout
///
/// Computed once from a [`crate::Workout`] and never mutated afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct TrainingSummary {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for TrainingSummary {
    /// One-line report, all numeric fields fixed to three decimals
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.training_type,
            self.duration_h,
            self.distance_km,
            self.avg_speed_kmh,
            self.calories_kcal
        )
    }
}
