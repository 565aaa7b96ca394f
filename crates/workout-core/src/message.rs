//! Human-readable workout report

use serde::{Deserialize, Serialize};

/// Snapshot of one workout prepared for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Activity display name
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: &str,
        duration_h: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        InfoMessage {
            training_type: training_type.to_string(),
            duration_h,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }

    /// Render the report line
    pub fn get_message(&self) -> String {
        format_message(
            &self.training_type,
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

impl std::fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.get_message())
    }
}

/// Format a report line with every number fixed to 3 decimal places
pub fn format_message(
    training_type: &str,
    duration_h: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories_kcal: f64,
) -> String {
    format!(
        "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
         Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
        training_type, duration_h, distance_km, mean_speed_kmh, calories_kcal
    )
}
