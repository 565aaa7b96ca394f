//! Workout report binary: prints a summary line for each sample package

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use workout_processing::{ProcessingConfig, ReportPipeline};
use workout_simulation::sample_packages;

/// Processing configuration compiled into the binary
const REPORT_CONFIG: &str = include_str!("../config/report.json");

fn load_config() -> anyhow::Result<ProcessingConfig> {
    ProcessingConfig::from_json(REPORT_CONFIG).context("Invalid embedded report configuration")
}

fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    // Logs go to stderr so stdout carries only report lines
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.debug_level.as_filter_directive())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        config = %config.name,
        error_handling = ?config.error_handling,
        "Starting workout-report v{}",
        env!("CARGO_PKG_VERSION")
    );

    let pipeline = ReportPipeline::new(config).context("Invalid processing configuration")?;
    let batch = pipeline
        .process(&sample_packages())
        .context("Failed to process sensor packages")?;

    for line in batch.lines() {
        println!("{}", line);
    }

    Ok(())
}
