//! Distance, speed and calorie calculations per workout type.
//!
//! Each record type implements [`TrainingMetrics`]. Distance and mean speed
//! have stride-based defaults; calories have no default, so every workout
//! type must carry its own formula.

use crate::models::{
    LEN_STEP, LEN_STROKE, M_IN_KM, MIN_IN_HOUR, Running, SportsWalking, Swimming, Workout,
    WorkoutCode,
};
use crate::summary::WorkoutSummary;

mod running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 1.79;
}

mod walking {
    /// km/h to m/s.
    pub const KMH_IN_MS: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

mod swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Capability set shared by every workout record.
pub trait TrainingMetrics {
    fn code(&self) -> WorkoutCode;

    /// Step or stroke count reported by the sensor.
    fn action(&self) -> u32;

    /// Duration in hours.
    fn duration(&self) -> f64;

    /// Body weight in kilograms.
    fn weight(&self) -> f64;

    /// Distance covered by one step (or stroke).
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometres.
    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.step_length() / M_IN_KM
    }

    /// Mean speed over the whole workout in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration()
    }

    /// Energy spent in kilocalories.
    fn spent_calories(&self) -> f64;
}

/// Assembles the summary of a workout from its calculations.
pub fn show_training_info<T: TrainingMetrics + ?Sized>(training: &T) -> WorkoutSummary {
    WorkoutSummary {
        training_type: training.code().label().to_string(),
        duration: training.duration(),
        distance: training.distance_km(),
        speed: training.mean_speed_kmh(),
        calories: training.spent_calories(),
    }
}

impl TrainingMetrics for Running {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Running
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> f64 {
        (running::SPEED_MULTIPLIER * self.mean_speed_kmh() + running::SPEED_SHIFT) * self.weight
            / M_IN_KM
            * self.duration
            * MIN_IN_HOUR
    }
}

impl TrainingMetrics for SportsWalking {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::SportsWalking
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * walking::KMH_IN_MS;
        let height_m = f64::from(self.height) / walking::CM_IN_M;
        (walking::WEIGHT_MULTIPLIER * self.weight
            + (speed_ms.powi(2) / height_m) * walking::SPEED_HEIGHT_MULTIPLIER * self.weight)
            * self.duration
            * MIN_IN_HOUR
    }
}

impl TrainingMetrics for Swimming {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Swimming
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    // Speed comes from pool geometry, not from stroke count.
    fn mean_speed_kmh(&self) -> f64 {
        f64::from(self.length_pool) * f64::from(self.count_pool) / M_IN_KM / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + swimming::SPEED_SHIFT)
            * swimming::WEIGHT_MULTIPLIER
            * self.weight
            * self.duration
    }
}

impl Workout {
    fn as_metrics(&self) -> &dyn TrainingMetrics {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl TrainingMetrics for Workout {
    fn code(&self) -> WorkoutCode {
        Workout::code(self)
    }

    fn action(&self) -> u32 {
        self.as_metrics().action()
    }

    fn duration(&self) -> f64 {
        self.as_metrics().duration()
    }

    fn weight(&self) -> f64 {
        self.as_metrics().weight()
    }

    fn step_length(&self) -> f64 {
        self.as_metrics().step_length()
    }

    fn distance_km(&self) -> f64 {
        self.as_metrics().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_metrics().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.as_metrics().spent_calories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_running_metrics() {
        let run = Running::new(15000, 1.0, 75.0);
        assert!((run.distance_km() - 9.75).abs() < EPS);
        assert!((run.mean_speed_kmh() - 9.75).abs() < EPS);
        assert!((run.spent_calories() - 797.805).abs() < 1e-6);
    }

    #[test]
    fn test_running_speed_scales_with_duration() {
        let run = Running::new(15000, 1.5, 75.0);
        assert!((run.mean_speed_kmh() - 6.5).abs() < EPS);
    }

    #[test]
    fn test_walking_metrics() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180);
        assert!((walk.distance_km() - 5.85).abs() < EPS);
        assert!((walk.mean_speed_kmh() - 5.85).abs() < EPS);

        let speed_ms = 5.85 * 0.278;
        let expected = (0.035 * 75.0 + (speed_ms * speed_ms / 1.8) * 0.029 * 75.0) * 60.0;
        assert!((walk.spent_calories() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_swimming_metrics() {
        let swim = Swimming::new(720, 1.0, 80.0, 25, 40);
        assert!((swim.distance_km() - 0.9936).abs() < EPS);
        assert!((swim.mean_speed_kmh() - 1.0).abs() < EPS);
        assert!((swim.spent_calories() - 336.0).abs() < 1e-6);
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let a = Swimming::new(100, 2.0, 70.0, 50, 20);
        let b = Swimming::new(5000, 2.0, 70.0, 50, 20);
        assert_eq!(a.mean_speed_kmh(), b.mean_speed_kmh());
        assert!(a.distance_km() < b.distance_km());
    }

    #[test]
    fn test_zero_duration_is_not_masked() {
        let run = Running::new(15000, 0.0, 75.0);
        assert!(run.mean_speed_kmh().is_infinite());

        let swim = Swimming::new(0, 0.0, 80.0, 0, 0);
        assert!(swim.mean_speed_kmh().is_nan());
    }

    #[test]
    fn test_zero_height_is_not_masked() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 0);
        assert!((walk.mean_speed_kmh() - 5.85).abs() < EPS);
        assert!(walk.spent_calories().is_infinite());
        assert!(walk.spent_calories() > 0.0);
    }

    #[test]
    fn test_workout_delegates_to_variant() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180);
        let workout = Workout::from(walk);
        assert_eq!(workout.spent_calories(), walk.spent_calories());
        assert_eq!(workout.step_length(), LEN_STEP);
        assert_eq!(Workout::from(Swimming::new(1, 1.0, 1.0, 1, 1)).step_length(), LEN_STROKE);
    }

    #[test]
    fn test_show_training_info() {
        let summary = show_training_info(&Workout::from(Swimming::new(720, 1.0, 80.0, 25, 40)));
        assert_eq!(summary.training_type, "Swimming");
        assert_eq!(summary.duration, 1.0);
        assert!((summary.distance - 0.9936).abs() < EPS);
        assert!((summary.speed - 1.0).abs() < EPS);
        assert!((summary.calories - 336.0).abs() < 1e-6);
    }
}
