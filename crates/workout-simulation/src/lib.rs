//! Workout-Simulation: Sensor package sources
//!
//! The fixed reference packages plus a seeded generator of realistic ones.

pub mod package_generator;
pub mod sample_packages;

pub use package_generator::*;
pub use sample_packages::*;
