//! Pool swimmer athletic profile.

use rand::{Rng, RngCore};
use workouts::models::WorkoutCode;

use super::AthleteProfile;

/// Athletic profile for pool swimming.
///
/// Cadence counts strokes per minute. Lap counts are derived from the
/// workout duration and a pace per 100 m, so generated pool geometry stays
/// consistent with the time spent in the water.
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    cadence: f64,
    variance: f64,
    /// Seconds per 100 m.
    pace_per_100m: f64,
    /// Pool lengths in metres to choose from.
    pool_lengths: Vec<u32>,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            cadence: 30.0,
            variance: 0.1,
            pace_per_100m: 150.0,
            pool_lengths: vec![25, 50],
        }
    }
}

impl SwimmerProfile {
    /// Creates a swimmer profile with the given pace per 100 m in seconds.
    pub fn with_pace(pace_per_100m: f64) -> Self {
        Self {
            pace_per_100m,
            ..Default::default()
        }
    }

    /// Creates a swimmer profile limited to one pool length.
    pub fn in_pool(length_m: u32) -> Self {
        Self {
            pool_lengths: vec![length_m],
            ..Default::default()
        }
    }
}

impl AthleteProfile for SwimmerProfile {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Swimming
    }

    fn cadence(&self) -> f64 {
        self.cadence
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_args(&self, duration_h: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        let length = match self.pool_lengths.len() {
            0 => 25,
            n => self.pool_lengths[rng.gen_range(0..n)],
        };
        let meters = duration_h * 3600.0 / self.pace_per_100m * 100.0;
        let laps = (meters / f64::from(length)).round().max(1.0);
        vec![f64::from(length), laps]
    }
}
