//! Input packages and driver configuration.

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// One sensor reading: a workout code and its positional arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub code: String,
    pub args: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, args: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            args: args.into(),
        }
    }
}

/// Ordered list of sensor packages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageBatch(pub Vec<SensorPackage>);

impl PackageBatch {
    /// Parses a JSON array such as `[{"code":"RUN","args":[15000,1,75]}]`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn packages(&self) -> &[SensorPackage] {
        &self.0
    }
}

/// The fixed packages processed by the `workouts` binary.
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// What the driver does when a package cannot be turned into a summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the run at the first bad package.
    #[default]
    Halt,
    /// Log the bad package and carry on with the rest.
    Skip,
}

/// Output line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// The human-readable summary line.
    #[default]
    Text,
    /// One JSON object per summary.
    JsonLines,
}

/// Configuration for a driver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub failure_policy: FailurePolicy,
    pub format: ReportFormat,
}
