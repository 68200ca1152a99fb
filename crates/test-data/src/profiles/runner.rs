//! Runner athletic profile.

use rand::RngCore;
use workouts::models::WorkoutCode;

use super::AthleteProfile;

/// Athletic profile for running.
///
/// Based on typical recreational to competitive cadence:
/// - Recreational: ~155 steps/min
/// - Trained: ~170 steps/min
/// - Elite: ~185 steps/min
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Steps per minute.
    cadence: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            cadence: 170.0,
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a runner profile with the given steps per minute.
    pub fn with_cadence(cadence: f64) -> Self {
        Self {
            cadence,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile.
    pub fn elite() -> Self {
        Self::with_cadence(185.0)
    }

    /// Creates a recreational runner profile.
    pub fn recreational() -> Self {
        Self::with_cadence(155.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Running
    }

    fn cadence(&self) -> f64 {
        self.cadence
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_args(&self, _duration_h: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        Vec::new()
    }
}
