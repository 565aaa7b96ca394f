//! Activity kinds, the shared activity record and raw sensor packages

use serde::{Deserialize, Serialize};
use crate::error::{WorkoutError, WorkoutResult};
use crate::training::{Running, SportsWalking, Swimming};

/// Workout classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityKind {
    /// All supported activities, in tag table order
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    /// Sensor tag identifying this activity in a raw package
    pub const fn tag(&self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Exact number of sensor values this activity is built from
    pub const fn arity(&self) -> usize {
        match self {
            ActivityKind::Running => Running::FIELD_COUNT,
            ActivityKind::SportsWalking => SportsWalking::FIELD_COUNT,
            ActivityKind::Swimming => Swimming::FIELD_COUNT,
        }
    }

    /// Name shown in the report line
    pub const fn display_name(&self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Inputs shared by every activity
///
/// Constructed once from validated values and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ActivityRecordFields")]
pub struct ActivityRecord {
    action_count: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl ActivityRecord {
    /// Create new activity record
    pub fn new(action_count: u32, duration_h: f64, weight_kg: f64) -> WorkoutResult<Self> {
        let duration_h = validate_positive("duration_h", duration_h)?;
        let weight_kg = validate_positive("weight_kg", weight_kg)?;

        Ok(ActivityRecord {
            action_count,
            duration_h,
            weight_kg,
        })
    }

    /// Steps or strokes counted by the sensor
    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    /// Workout duration in hours, always positive
    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Unvalidated wire form of [`ActivityRecord`]
#[derive(Deserialize)]
struct ActivityRecordFields {
    action_count: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl TryFrom<ActivityRecordFields> for ActivityRecord {
    type Error = WorkoutError;

    fn try_from(fields: ActivityRecordFields) -> WorkoutResult<Self> {
        ActivityRecord::new(fields.action_count, fields.duration_h, fields.weight_kg)
    }
}

/// Validate a measurement that must be finite and strictly positive
pub fn validate_positive(field: &'static str, value: f64) -> WorkoutResult<f64> {
    if !value.is_finite() {
        return Err(WorkoutError::InvalidFieldValue {
            field,
            value,
            reason: "must be finite",
        });
    }

    if value <= 0.0 {
        return Err(WorkoutError::InvalidFieldValue {
            field,
            value,
            reason: "must be positive",
        });
    }

    Ok(value)
}

/// Validate a counter reading and convert it to an integer
pub fn validate_count(field: &'static str, value: f64) -> WorkoutResult<u32> {
    if !value.is_finite() || value < 0.0 {
        return Err(WorkoutError::InvalidFieldValue {
            field,
            value,
            reason: "must be a non-negative count",
        });
    }

    if value.fract() != 0.0 {
        return Err(WorkoutError::InvalidFieldValue {
            field,
            value,
            reason: "must be a whole number",
        });
    }

    if value > u32::MAX as f64 {
        return Err(WorkoutError::InvalidFieldValue {
            field,
            value,
            reason: "exceeds counter range",
        });
    }

    Ok(value as u32)
}

/// One raw reading from a fitness tracker: activity tag plus positional values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Activity tag, e.g. "RUN"
    pub workout_type: String,
    /// Values in field declaration order
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: &str, data: Vec<f64>) -> Self {
        SensorPackage {
            workout_type: workout_type.to_string(),
            data,
        }
    }
}
