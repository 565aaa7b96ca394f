//! Workout-Processing: From raw sensor packages to workout reports
//!
//! Package dispatch, batch processing and configuration.

pub mod config;
pub mod dispatcher;
pub mod pipeline;

pub use config::{DebugLevel, ErrorHandling, ProcessingConfig};
pub use dispatcher::{descriptor_for, read_package, read_sensor_package, ActivityDescriptor, ACTIVITY_TABLE};
pub use pipeline::{BatchReport, PackageFailure, PackageReport, PipelineSummary, ReportPipeline};
