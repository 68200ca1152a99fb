//! Synthetic sensor packages for the workouts crate.
//!
//! Generates realistic `RUN`, `WLK` and `SWM` packages from athlete profiles,
//! for tests that check calculation properties over many inputs.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let mut rng = seeded_rng(12345);
//! let packages = PackageGenerator::new().generate_batch(&standard_profiles(), 30, &mut rng);
//! ```

pub mod generators;
pub mod profiles;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::generators::{PackageGenConfig, PackageGenerator, seeded_rng};
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
        standard_profiles,
    };
    pub use workouts::config::SensorPackage;
}
