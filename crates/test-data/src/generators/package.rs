//! Sensor package generation from athlete profiles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use workouts::config::SensorPackage;

use crate::profiles::{AthleteProfile, sample_variance};

/// Configuration for package generation.
#[derive(Debug, Clone)]
pub struct PackageGenConfig {
    /// Range of workout durations in hours.
    pub duration_hours: (f64, f64),
    /// Mean body weight in kilograms.
    pub weight_mean: f64,
    /// Standard deviation of body weight.
    pub weight_std_dev: f64,
}

impl Default for PackageGenConfig {
    fn default() -> Self {
        Self {
            duration_hours: (0.25, 2.0),
            weight_mean: 72.0,
            weight_std_dev: 11.0,
        }
    }
}

/// Generates sensor packages with realistic values.
pub struct PackageGenerator {
    config: PackageGenConfig,
}

impl PackageGenerator {
    /// Creates a new package generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: PackageGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: PackageGenConfig) -> Self {
        Self { config }
    }

    /// Generates one package for the profile's workout type.
    ///
    /// Arguments come out in dispatch order: action, duration, weight, then
    /// the profile's extra arguments.
    pub fn generate<R: Rng>(&self, profile: &dyn AthleteProfile, rng: &mut R) -> SensorPackage {
        let (min_h, max_h) = self.config.duration_hours;
        let duration = if max_h > min_h {
            rng.gen_range(min_h..max_h)
        } else {
            min_h
        };

        let variance_factor = sample_variance(profile, rng);
        let action = (profile.cadence() * variance_factor * duration * 60.0).round();
        let weight = self.sample_weight(rng);

        let mut args = vec![action, duration, weight];
        args.extend(profile.extra_args(duration, rng));

        tracing::debug!(code = profile.code().as_str(), ?args, "Generated package");
        SensorPackage::new(profile.code().as_str(), args)
    }

    /// Generates `count` packages, cycling through `profiles` in order.
    pub fn generate_batch<R: Rng>(
        &self,
        profiles: &[Box<dyn AthleteProfile>],
        count: usize,
        rng: &mut R,
    ) -> Vec<SensorPackage> {
        if profiles.is_empty() {
            return Vec::new();
        }
        (0..count)
            .map(|i| self.generate(profiles[i % profiles.len()].as_ref(), rng))
            .collect()
    }

    fn sample_weight<R: Rng>(&self, rng: &mut R) -> f64 {
        let weight = match Normal::new(self.config.weight_mean, self.config.weight_std_dev) {
            Ok(normal) if self.config.weight_std_dev > 0.0 => normal.sample(rng),
            _ => self.config.weight_mean,
        };
        weight.clamp(40.0, 150.0)
    }
}

impl Default for PackageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic RNG for reproducible batches.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
