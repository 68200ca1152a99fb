//! Race-walker athletic profile.

use rand::RngCore;
use rand_distr::{Distribution, Normal};
use workouts::models::WorkoutCode;

use super::AthleteProfile;

/// Athletic profile for race-walking.
///
/// Cadence around 130 steps/min; heights drawn from a normal distribution
/// in centimetres.
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    cadence: f64,
    variance: f64,
    /// Mean height in cm.
    height_mean: f64,
    height_std_dev: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            cadence: 130.0,
            variance: 0.1,
            height_mean: 172.0,
            height_std_dev: 9.0,
        }
    }
}

impl WalkerProfile {
    /// Creates a competitive race-walker profile (~150 steps/min).
    pub fn competitive() -> Self {
        Self {
            cadence: 150.0,
            variance: 0.06,
            ..Default::default()
        }
    }

    /// Creates a walker profile with a fixed height.
    pub fn with_height(height_cm: f64) -> Self {
        Self {
            height_mean: height_cm,
            height_std_dev: 0.0,
            ..Default::default()
        }
    }

    fn sample_height(&self, rng: &mut dyn RngCore) -> f64 {
        let height = match Normal::new(self.height_mean, self.height_std_dev) {
            Ok(normal) if self.height_std_dev > 0.0 => normal.sample(rng),
            _ => self.height_mean,
        };
        height.clamp(140.0, 210.0).round()
    }
}

impl AthleteProfile for WalkerProfile {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::SportsWalking
    }

    fn cadence(&self) -> f64 {
        self.cadence
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_args(&self, _duration_h: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        vec![self.sample_height(rng)]
    }
}
