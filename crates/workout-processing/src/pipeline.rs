//! Report pipeline: sensor packages in, formatted workout reports out

use crate::config::{ErrorHandling, ProcessingConfig};
use crate::dispatcher::read_sensor_package;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use workout_core::{config_error, InfoMessage, SensorPackage, Training, WorkoutError, WorkoutResult};

/// Processing pipeline for batches of sensor packages
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    config: ProcessingConfig,
}

/// Report for one successfully processed package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageReport {
    /// Position of the package in the input batch
    pub index: usize,
    pub workout_type: String,
    pub info: InfoMessage,
}

/// Package that was skipped in bypass mode
#[derive(Debug, Clone, PartialEq)]
pub struct PackageFailure {
    pub index: usize,
    pub workout_type: String,
    pub error: WorkoutError,
}

/// Pipeline execution result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Reports in input order
    pub reports: Vec<PackageReport>,
    /// Failures in input order, only populated in bypass mode
    pub failures: Vec<PackageFailure>,
}

/// Counts for a finished batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub total: usize,
    pub processed: usize,
    pub failed: usize,
    pub success_rate: f32,
}

impl PackageReport {
    pub fn message(&self) -> String {
        self.info.get_message()
    }
}

impl BatchReport {
    /// Report lines in input order
    pub fn lines(&self) -> Vec<String> {
        self.reports.iter().map(PackageReport::message).collect()
    }

    pub fn summary(&self) -> PipelineSummary {
        let processed = self.reports.len();
        let failed = self.failures.len();
        let total = processed + failed;

        let success_rate = if total == 0 {
            1.0
        } else {
            processed as f32 / total as f32
        };

        PipelineSummary {
            total,
            processed,
            failed,
            success_rate,
        }
    }
}

impl ReportPipeline {
    /// Create pipeline from a validated configuration
    pub fn new(config: ProcessingConfig) -> WorkoutResult<Self> {
        config.validate()?;
        Ok(ReportPipeline { config })
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Dispatch one package and build its report message
    pub fn process_package(&self, package: &SensorPackage) -> WorkoutResult<InfoMessage> {
        let workout = read_sensor_package(package)?;
        Ok(workout.show_training_info())
    }

    /// Process a batch of packages in order
    pub fn process(&self, packages: &[SensorPackage]) -> WorkoutResult<BatchReport> {
        if packages.len() > self.config.max_packages {
            return Err(config_error!(
                "Batch of {} packages exceeds limit of {}",
                packages.len(),
                self.config.max_packages
            ));
        }

        let mut batch = BatchReport::default();

        for (index, package) in packages.iter().enumerate() {
            match self.process_package(package) {
                Ok(info) => {
                    debug!(
                        index,
                        workout_type = %package.workout_type,
                        calories = info.calories_kcal,
                        "Package processed"
                    );
                    batch.reports.push(PackageReport {
                        index,
                        workout_type: package.workout_type.clone(),
                        info,
                    });
                }
                Err(error) => match self.config.error_handling {
                    ErrorHandling::StrictMode => return Err(error),
                    ErrorHandling::BypassMode => {
                        warn!(
                            index,
                            workout_type = %package.workout_type,
                            %error,
                            "Package failed, bypassing"
                        );
                        batch.failures.push(PackageFailure {
                            index,
                            workout_type: package.workout_type.clone(),
                            error,
                        });
                    }
                },
            }
        }

        let summary = batch.summary();
        info!(
            total = summary.total,
            processed = summary.processed,
            failed = summary.failed,
            "Batch complete"
        );

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packages() -> Vec<SensorPackage> {
        vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("BIKE", vec![100.0, 1.0, 75.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0]),
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ]
    }

    #[test]
    fn test_strict_mode_halts_on_first_error() {
        let pipeline = ReportPipeline::new(ProcessingConfig::strict()).unwrap();

        let err = pipeline.process(&packages()).unwrap_err();
        assert_eq!(err, WorkoutError::UnknownActivityType { tag: "BIKE".to_string() });
    }

    #[test]
    fn test_bypass_mode_skips_failures() {
        let pipeline = ReportPipeline::new(ProcessingConfig::lenient()).unwrap();
        let batch = pipeline.process(&packages()).unwrap();

        let indices: Vec<usize> = batch.reports.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 3]);

        assert_eq!(batch.failures.len(), 2);
        assert_eq!(batch.failures[0].index, 1);
        assert!(matches!(
            batch.failures[1].error,
            WorkoutError::FieldCountMismatch { tag: "WLK", expected: 4, actual: 3 }
        ));

        let summary = batch.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed, 2);
        assert!((summary.success_rate - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_batch() {
        let pipeline = ReportPipeline::new(ProcessingConfig::default()).unwrap();
        let batch = pipeline.process(&[]).unwrap();

        assert!(batch.lines().is_empty());
        assert_eq!(batch.summary().success_rate, 1.0);
    }

    #[test]
    fn test_batch_limit() {
        let mut config = ProcessingConfig::strict();
        config.max_packages = 1;
        let pipeline = ReportPipeline::new(config).unwrap();

        let err = pipeline.process(&packages()).unwrap_err();
        assert!(matches!(err, WorkoutError::ConfigurationError { .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ProcessingConfig::strict();
        config.max_packages = 0;
        assert!(ReportPipeline::new(config).is_err());
    }

    #[test]
    fn test_process_package_message() {
        let pipeline = ReportPipeline::new(ProcessingConfig::default()).unwrap();
        let info = pipeline
            .process_package(&SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]))
            .unwrap();

        assert_eq!(info.training_type, "Running");
        assert!(info.get_message().ends_with("Потрачено ккал: 797.805."));
    }
}
