//! Runs sensor packages through dispatch, calculation and formatting.

use std::io::Write;

use tracing::{debug, error, info, warn};

use crate::config::{DriverConfig, FailurePolicy, ReportFormat, SensorPackage};
use crate::dispatch::read_package;
use crate::errors::Result;
use crate::summary::WorkoutSummary;
use crate::training::show_training_info;

/// A package the driver could not process.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPackage {
    pub index: usize,
    pub code: String,
    pub reason: String,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Indices of packages that produced an output line.
    pub emitted: Vec<usize>,
    /// Packages dropped under [`FailurePolicy::Skip`].
    pub skipped: Vec<SkippedPackage>,
}

/// Processes packages in order, writing one line per summary.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    config: DriverConfig,
}

impl Driver {
    /// Creates a driver with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver with custom configuration.
    pub fn with_config(config: DriverConfig) -> Self {
        Self { config }
    }

    /// Builds the summary for a single package.
    pub fn summarize(&self, package: &SensorPackage) -> Result<WorkoutSummary> {
        let workout = read_package(&package.code, &package.args)?;
        let summary = show_training_info(&workout);
        debug!(code = %package.code, ?summary, "Computed summary");
        Ok(summary)
    }

    /// Writes one line per package to `out`, in input order.
    ///
    /// Under [`FailurePolicy::Halt`] the first failing package ends the run
    /// with its error; lines already written stay written. Write failures
    /// always end the run.
    pub fn run<W: Write>(&self, packages: &[SensorPackage], out: &mut W) -> Result<RunReport> {
        info!(packages = packages.len(), "Processing sensor packages");
        let mut report = RunReport::default();

        for (index, package) in packages.iter().enumerate() {
            let summary = match self.summarize(package) {
                Ok(summary) => summary,
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::Halt => {
                        error!(index, code = %package.code, "Failed to process package: {e}");
                        return Err(e);
                    }
                    FailurePolicy::Skip => {
                        warn!(index, code = %package.code, "Skipping package: {e}");
                        report.skipped.push(SkippedPackage {
                            index,
                            code: package.code.clone(),
                            reason: e.to_string(),
                        });
                        continue;
                    }
                },
            };

            if summary.is_degenerate() {
                warn!(index, code = %package.code, "Summary contains non-finite values");
            }

            self.write_summary(&summary, out)?;
            report.emitted.push(index);
        }

        info!(
            emitted = report.emitted.len(),
            skipped = report.skipped.len(),
            "Run complete"
        );
        Ok(report)
    }

    fn write_summary<W: Write>(&self, summary: &WorkoutSummary, out: &mut W) -> Result<()> {
        match self.config.format {
            ReportFormat::Text => writeln!(out, "{summary}")?,
            ReportFormat::JsonLines => {
                serde_json::to_writer(&mut *out, summary)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_packages;
    use crate::errors::WorkoutError;

    fn run_to_string(driver: &Driver, packages: &[SensorPackage]) -> (Result<RunReport>, String) {
        let mut out = Vec::new();
        let result = driver.run(packages, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_one_line_per_package() {
        let (result, output) = run_to_string(&Driver::new(), &default_packages());
        let report = result.unwrap();
        assert_eq!(report.emitted, vec![0, 1, 2]);
        assert!(report.skipped.is_empty());

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
        assert!(lines[1].starts_with("Тип тренировки: Running;"));
        assert!(lines[2].starts_with("Тип тренировки: SportsWalking;"));
    }

    #[test]
    fn test_halt_on_unknown_code() {
        let packages = vec![
            SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
            SensorPackage::new("XYZ", [1.0, 1.0, 1.0]),
            SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        ];
        let (result, output) = run_to_string(&Driver::new(), &packages);
        assert!(matches!(result, Err(WorkoutError::UnknownWorkoutCode(_))));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_skip_policy_isolates_failures() {
        let driver = Driver::with_config(DriverConfig {
            failure_policy: FailurePolicy::Skip,
            ..Default::default()
        });
        let packages = vec![
            SensorPackage::new("WLK", [9000.0, 1.0, 75.0]),
            SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        ];
        let (result, output) = run_to_string(&driver, &packages);
        let report = result.unwrap();
        assert_eq!(report.emitted, vec![1]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 0);
        assert_eq!(report.skipped[0].code, "WLK");
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_json_lines_format() {
        let driver = Driver::with_config(DriverConfig {
            format: ReportFormat::JsonLines,
            ..Default::default()
        });
        let (result, output) =
            run_to_string(&driver, &[SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0])]);
        result.unwrap();

        let summary: WorkoutSummary = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(summary.training_type, "Swimming");
        assert!((summary.calories - 336.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_summary_still_emitted() {
        let (result, output) =
            run_to_string(&Driver::new(), &[SensorPackage::new("RUN", [15000.0, 0.0, 75.0])]);
        assert_eq!(result.unwrap().emitted, vec![0]);
        assert!(output.contains("Ср. скорость: inf км/ч"));
    }

    #[test]
    fn test_zero_height_summary_still_emitted() {
        let (result, output) =
            run_to_string(&Driver::new(), &[SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 0.0])]);
        assert_eq!(result.unwrap().emitted, vec![0]);
        assert!(output.trim_end().ends_with("Потрачено ккал: inf."));
    }

    struct ClosedWriter;

    impl Write for ClosedWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_ends_run() {
        let result = Driver::new().run(&default_packages(), &mut ClosedWriter);
        assert!(matches!(result, Err(WorkoutError::Io(_))));
    }

    #[test]
    fn test_write_failure_ends_run_under_skip_policy() {
        let driver = Driver::with_config(DriverConfig {
            failure_policy: FailurePolicy::Skip,
            ..Default::default()
        });
        let result = driver.run(&default_packages(), &mut ClosedWriter);
        assert!(matches!(result, Err(WorkoutError::Io(_))));

        let json_driver = Driver::with_config(DriverConfig {
            failure_policy: FailurePolicy::Skip,
            format: ReportFormat::JsonLines,
        });
        let result = json_driver.run(&default_packages(), &mut ClosedWriter);
        assert!(matches!(result, Err(WorkoutError::Json(_) | WorkoutError::Io(_))));
    }
}
