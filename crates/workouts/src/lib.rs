//! Workout statistics for running, race-walking and swimming.
//!
//! Sensor packages (a three-letter code plus positional numbers) are turned
//! into workout records, from which distance, mean speed and calories are
//! derived and rendered as one summary line per workout.
//!
//! ```rust,ignore
//! use workouts::prelude::*;
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", show_training_info(&workout));
//! ```

pub mod config;
pub mod dispatch;
pub mod driver;
pub mod errors;
pub mod models;
pub mod summary;
pub mod training;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{
        DriverConfig, FailurePolicy, PackageBatch, ReportFormat, SensorPackage, default_packages,
    };
    pub use crate::dispatch::read_package;
    pub use crate::driver::{Driver, RunReport, SkippedPackage};
    pub use crate::errors::{Result, WorkoutError};
    pub use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutCode};
    pub use crate::summary::WorkoutSummary;
    pub use crate::training::{TrainingMetrics, show_training_info};
}
