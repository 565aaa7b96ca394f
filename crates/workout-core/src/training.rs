//! Per-activity formulas for distance, mean speed and calories
//!
//! Each activity implements [`Training`]. Distance and mean speed have shared
//! defaults based on step length; calorie expenditure has none and every
//! activity must provide its own.

use serde::{Deserialize, Serialize};
use crate::activity::{validate_positive, ActivityKind, ActivityRecord};
use crate::error::{WorkoutError, WorkoutResult};
use crate::message::InfoMessage;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Centimeters in a meter
pub const CM_IN_M: f64 = 100.0;
/// km/h to m/s factor, 1000 / 3600 rounded to 3 decimals
pub const KMH_TO_MS: f64 = 0.278;
/// Step length used when an activity does not override it
pub const BASE_STEP_LENGTH_M: f64 = 0.65;

/// Values derived from an activity record. Recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedResult {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Formula set shared by all activities
pub trait Training {
    /// Shared raw inputs
    fn record(&self) -> &ActivityRecord;

    /// Activity classification
    fn kind(&self) -> ActivityKind;

    /// Distance covered by one action, in meters
    fn step_length_m(&self) -> f64 {
        BASE_STEP_LENGTH_M
    }

    /// Distance in km
    fn distance_km(&self) -> f64 {
        self.record().action_count() as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.record().duration_h()
    }

    /// Calories spent in kcal
    fn spent_calories(&self) -> f64;

    fn computed(&self) -> ComputedResult {
        ComputedResult {
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }

    /// Build the report message for this workout
    fn show_training_info(&self) -> InfoMessage {
        let result = self.computed();
        InfoMessage::new(
            self.kind().display_name(),
            self.record().duration_h(),
            result.distance_km,
            result.mean_speed_kmh,
            result.calories_kcal,
        )
    }
}

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    record: ActivityRecord,
}

impl Running {
    /// action_count, duration_h, weight_kg
    pub const FIELD_COUNT: usize = 3;

    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action_count: u32, duration_h: f64, weight_kg: f64) -> WorkoutResult<Self> {
        Ok(Running {
            record: ActivityRecord::new(action_count, duration_h, weight_kg)?,
        })
    }
}

impl Training for Running {
    fn record(&self) -> &ActivityRecord {
        &self.record
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.record.weight_kg()
            / M_IN_KM
            * self.record.duration_h()
            * MIN_IN_H
    }
}

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SportsWalkingFields")]
pub struct SportsWalking {
    record: ActivityRecord,
    height_cm: f64,
}

impl SportsWalking {
    /// action_count, duration_h, weight_kg, height_cm
    pub const FIELD_COUNT: usize = 4;

    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> WorkoutResult<Self> {
        let record = ActivityRecord::new(action_count, duration_h, weight_kg)?;
        let height_cm = validate_positive("height_cm", height_cm)?;

        Ok(SportsWalking { record, height_cm })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

#[derive(Deserialize)]
struct SportsWalkingFields {
    record: ActivityRecord,
    height_cm: f64,
}

impl TryFrom<SportsWalkingFields> for SportsWalking {
    type Error = WorkoutError;

    fn try_from(fields: SportsWalkingFields) -> WorkoutResult<Self> {
        Ok(SportsWalking {
            record: fields.record,
            height_cm: validate_positive("height_cm", fields.height_cm)?,
        })
    }
}

impl Training for SportsWalking {
    fn record(&self) -> &ActivityRecord {
        &self.record
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.record.weight_kg();
        let speed_ms = self.mean_speed_kmh() * KMH_TO_MS;
        let height_m = self.height_cm / CM_IN_M;

        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_ms.powi(2) / height_m) * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.record.duration_h()
            * MIN_IN_H
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SwimmingFields")]
pub struct Swimming {
    record: ActivityRecord,
    pool_length_m: f64,
    pool_lap_count: u32,
}

impl Swimming {
    /// action_count, duration_h, weight_kg, pool_length_m, pool_lap_count
    pub const FIELD_COUNT: usize = 5;

    /// Distance covered by one stroke
    pub const STROKE_LENGTH_M: f64 = 1.38;

    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: u32,
    ) -> WorkoutResult<Self> {
        let record = ActivityRecord::new(action_count, duration_h, weight_kg)?;
        let pool_length_m = validate_positive("pool_length_m", pool_length_m)?;

        Ok(Swimming {
            record,
            pool_length_m,
            pool_lap_count,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_lap_count(&self) -> u32 {
        self.pool_lap_count
    }
}

#[derive(Deserialize)]
struct SwimmingFields {
    record: ActivityRecord,
    pool_length_m: f64,
    pool_lap_count: u32,
}

impl TryFrom<SwimmingFields> for Swimming {
    type Error = WorkoutError;

    fn try_from(fields: SwimmingFields) -> WorkoutResult<Self> {
        Ok(Swimming {
            record: fields.record,
            pool_length_m: validate_positive("pool_length_m", fields.pool_length_m)?,
            pool_lap_count: fields.pool_lap_count,
        })
    }
}

impl Training for Swimming {
    fn record(&self) -> &ActivityRecord {
        &self.record
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn step_length_m(&self) -> f64 {
        Self::STROKE_LENGTH_M
    }

    // Speed comes from pool laps, not from stroke distance
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lap_count as f64 / M_IN_KM / self.record.duration_h()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.record.weight_kg()
            * self.record.duration_h()
    }
}

/// Any supported workout, as produced by package dispatch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(training) => training,
            Workout::SportsWalking(training) => training,
            Workout::Swimming(training) => training,
        }
    }
}

impl Training for Workout {
    fn record(&self) -> &ActivityRecord {
        self.as_training().record()
    }

    fn kind(&self) -> ActivityKind {
        self.as_training().kind()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(training: Running) -> Self {
        Workout::Running(training)
    }
}

impl From<SportsWalking> for Workout {
    fn from(training: SportsWalking) -> Self {
        Workout::SportsWalking(training)
    }
}

impl From<Swimming> for Workout {
    fn from(training: Swimming) -> Self {
        Workout::Swimming(training)
    }
}
