//! Athletic profiles.
//!
//! Profiles define realistic cadences and workout-specific parameters for
//! each workout type. They are used by the package generator to produce
//! plausible sensor readings.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use rand::RngCore;
use workouts::models::WorkoutCode;

/// Trait for athletic profiles.
///
/// Implementations should provide:
/// - The workout code the profile produces
/// - Steady cadence (steps or strokes per minute)
/// - Day-to-day variance
/// - Trailing arguments specific to the workout type
pub trait AthleteProfile: Send + Sync {
    /// Workout code of generated packages.
    fn code(&self) -> WorkoutCode;

    /// Steps (or strokes) per minute at steady effort.
    fn cadence(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    fn variance(&self) -> f64;

    /// Arguments following `[action, duration, weight]` for a workout lasting
    /// `duration_h` hours. Empty for running.
    fn extra_args(&self, duration_h: f64, rng: &mut dyn RngCore) -> Vec<f64>;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut dyn RngCore) -> f64 {
    use rand_distr::{Distribution, Normal};

    match Normal::new(1.0, profile.variance()) {
        Ok(normal) if profile.variance() > 0.0 => normal.sample(rng).clamp(0.7, 1.4),
        _ => 1.0,
    }
}

/// One default profile per workout type.
pub fn standard_profiles() -> Vec<Box<dyn AthleteProfile>> {
    vec![
        Box::new(SwimmerProfile::default()),
        Box::new(RunnerProfile::default()),
        Box::new(WalkerProfile::default()),
    ]
}
