//! Human-readable workout summary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived statistics of one workout, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Record type name, e.g. `Running`.
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// Mean speed in km/h.
    pub speed: f64,
    /// Kilocalories.
    pub calories: f64,
}

impl WorkoutSummary {
    /// Renders the summary line.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True when any figure came out as infinity or NaN.
    pub fn is_degenerate(&self) -> bool {
        ![self.duration, self.distance, self.speed, self.calories]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swim_summary() -> WorkoutSummary {
        WorkoutSummary {
            training_type: "Swimming".into(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn test_message_format() {
        assert_eq!(
            swim_summary().message(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_message_is_stable() {
        let summary = swim_summary();
        assert_eq!(summary.message(), summary.message());
    }

    #[test]
    fn test_degenerate_values_render() {
        let summary = WorkoutSummary {
            speed: f64::INFINITY,
            calories: f64::NAN,
            ..swim_summary()
        };
        assert!(summary.is_degenerate());
        assert!(summary.message().contains("Ср. скорость: inf км/ч"));
        assert!(summary.message().contains("Потрачено ккал: NaN."));
        assert!(!swim_summary().is_degenerate());
    }
}
