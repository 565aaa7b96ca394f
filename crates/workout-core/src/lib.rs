//! Workout-Core: Foundation types for workout statistics
//!
//! Activity records, the per-activity formula set and the report message.

pub mod activity;
pub mod error;
pub mod message;
pub mod training;

pub use activity::*;
pub use error::{WorkoutError, WorkoutResult};
pub use message::{format_message, InfoMessage};
pub use training::{ComputedResult, Running, SportsWalking, Swimming, Training, Workout};
