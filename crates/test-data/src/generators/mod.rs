//! Sensor package generators.
//!
//! - [`PackageGenerator`]: builds packages from an athlete profile

pub mod package;

pub use package::{PackageGenConfig, PackageGenerator, seeded_rng};
