//! Configuration management for report processing

use serde::{Deserialize, Serialize};
use workout_core::{config_error, WorkoutResult};

/// Global processing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Configuration name
    pub name: String,
    /// Error handling strategy
    pub error_handling: ErrorHandling,
    /// Default log verbosity
    pub debug_level: DebugLevel,
    /// Largest batch accepted by a single run
    pub max_packages: usize,
}

/// Error handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorHandling {
    /// Stop processing on any error
    StrictMode,
    /// Continue processing, skipping failed packages
    BypassMode,
}

/// Debug logging levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebugLevel {
    None,
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

impl DebugLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter_directive(&self) -> &'static str {
        match self {
            DebugLevel::None => "off",
            DebugLevel::Error => "error",
            DebugLevel::Warning => "warn",
            DebugLevel::Info => "info",
            DebugLevel::Debug => "debug",
            DebugLevel::Trace => "trace",
        }
    }
}

const DEFAULT_MAX_PACKAGES: usize = 10_000;

/// Preset configurations for common scenarios
impl ProcessingConfig {
    /// Halt on the first bad package
    pub fn strict() -> Self {
        ProcessingConfig {
            name: "Strict".to_string(),
            error_handling: ErrorHandling::StrictMode,
            debug_level: DebugLevel::Warning,
            max_packages: DEFAULT_MAX_PACKAGES,
        }
    }

    /// Skip bad packages and keep going
    pub fn lenient() -> Self {
        ProcessingConfig {
            name: "Lenient".to_string(),
            error_handling: ErrorHandling::BypassMode,
            debug_level: DebugLevel::Info,
            max_packages: DEFAULT_MAX_PACKAGES,
        }
    }

    /// Validate entire configuration
    pub fn validate(&self) -> WorkoutResult<()> {
        if self.name.trim().is_empty() {
            return Err(config_error!("Configuration name cannot be empty"));
        }

        if self.max_packages == 0 {
            return Err(config_error!("max_packages must be greater than 0"));
        }

        Ok(())
    }

    /// Import configuration from JSON
    pub fn from_json(json: &str) -> WorkoutResult<Self> {
        let config: ProcessingConfig = serde_json::from_str(json)
            .map_err(|e| config_error!("Failed to deserialize configuration: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self::strict()
    }
}
