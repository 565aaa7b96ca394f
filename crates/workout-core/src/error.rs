//! Error handling for workout calculations
//!
//! Every failure a caller can observe while turning a raw sensor package into
//! a report is one of these variants.

use core::fmt;

/// Result type alias for workout operations
pub type WorkoutResult<T> = Result<T, WorkoutError>;

/// Error type for all workout operations
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WorkoutError {
    /// Activity tag is not one of the recognized codes
    UnknownActivityType {
        /// Tag as received
        tag: String,
    },

    /// Number of sensor values does not match the activity arity
    FieldCountMismatch {
        /// Tag of the resolved activity
        tag: &'static str,
        /// Arity required by the activity
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// A sensor value is out of range for its field
    InvalidFieldValue {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Invalid processing configuration
    ConfigurationError {
        /// Description of the configuration error
        message: String,
    },
}

impl fmt::Display for WorkoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutError::UnknownActivityType { tag } => {
                write!(f, "Unknown activity type: '{}'", tag)
            }
            WorkoutError::FieldCountMismatch { tag, expected, actual } => {
                write!(f, "Field count mismatch for {}: expected {} values, got {}",
                       tag, expected, actual)
            }
            WorkoutError::InvalidFieldValue { field, value, reason } => {
                write!(f, "Invalid value for {}: {} ({})", field, value, reason)
            }
            WorkoutError::ConfigurationError { message } => {
                write!(f, "Configuration error: {}", message)
            }
        }
    }
}

impl std::error::Error for WorkoutError {}

/// Convenience macro for creating configuration errors
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)+) => {
        $crate::error::WorkoutError::ConfigurationError {
            message: format!($($arg)+)
        }
    };
}
