//! Sensor package generator with realistic per-activity readings

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use workout_core::{config_error, ActivityKind, SensorPackage, WorkoutResult};

/// Configuration for package generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Shortest workout in hours
    pub min_duration_h: f64,
    /// Longest workout in hours
    pub max_duration_h: f64,
    /// Athlete weight distribution
    pub weight_mean_kg: f64,
    pub weight_std_kg: f64,
    /// Athlete height distribution, used by walking packages
    pub height_mean_cm: f64,
    pub height_std_cm: f64,
    /// Pool lengths to choose from
    pub pool_lengths_m: Vec<f64>,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_duration_h: 0.25,
            max_duration_h: 2.0,
            weight_mean_kg: 75.0,
            weight_std_kg: 12.0,
            height_mean_cm: 175.0,
            height_std_cm: 9.0,
            pool_lengths_m: vec![25.0, 50.0],
            seed: None,
        }
    }
}

const WEIGHT_RANGE_KG: (f64, f64) = (35.0, 180.0);
const HEIGHT_RANGE_CM: (f64, f64) = (130.0, 220.0);

/// Seeded source of valid sensor packages
pub struct PackageGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    weight_dist: Normal<f64>,
    height_dist: Normal<f64>,
}

impl PackageGenerator {
    /// Create new generator with configuration
    pub fn new(config: GeneratorConfig) -> WorkoutResult<Self> {
        if !(config.min_duration_h > 0.0 && config.min_duration_h <= config.max_duration_h) {
            return Err(config_error!(
                "Invalid duration range {}..{} h",
                config.min_duration_h,
                config.max_duration_h
            ));
        }

        if config.pool_lengths_m.is_empty() || config.pool_lengths_m.iter().any(|l| *l <= 0.0) {
            return Err(config_error!("Pool lengths must be non-empty and positive"));
        }

        // Normal::new only rejects a non-finite std_dev
        if !(config.weight_std_kg >= 0.0 && config.height_std_cm >= 0.0) {
            return Err(config_error!(
                "Standard deviations must be non-negative, got weight {} kg, height {} cm",
                config.weight_std_kg,
                config.height_std_cm
            ));
        }

        let weight_dist = Normal::new(config.weight_mean_kg, config.weight_std_kg)
            .map_err(|e| config_error!("Failed to create weight distribution: {}", e))?;
        let height_dist = Normal::new(config.height_mean_cm, config.height_std_cm)
            .map_err(|e| config_error!("Failed to create height distribution: {}", e))?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(PackageGenerator {
            config,
            rng,
            weight_dist,
            height_dist,
        })
    }

    /// Generate one package for the given activity
    pub fn generate(&mut self, kind: ActivityKind) -> SensorPackage {
        let duration_h = self
            .rng
            .gen_range(self.config.min_duration_h..=self.config.max_duration_h);
        let weight_kg = self.sample_weight();
        let minutes = duration_h * 60.0;

        let data = match kind {
            ActivityKind::Running => {
                let cadence = self.rng.gen_range(150.0..190.0);
                vec![(cadence * minutes).round(), duration_h, weight_kg]
            }
            ActivityKind::SportsWalking => {
                let cadence = self.rng.gen_range(100.0..135.0);
                let height_cm = self.sample_height();
                vec![(cadence * minutes).round(), duration_h, weight_kg, height_cm]
            }
            ActivityKind::Swimming => {
                let index = self.rng.gen_range(0..self.config.pool_lengths_m.len());
                let pool_length_m = self.config.pool_lengths_m[index];
                // 1.5 to 3 minutes per 50 m
                let minutes_per_lap = self.rng.gen_range(1.5..3.0) * pool_length_m / 50.0;
                let laps = (minutes / minutes_per_lap).floor().max(1.0);
                let strokes_per_lap = self.rng.gen_range(15.0..30.0) * pool_length_m / 25.0;
                vec![
                    (laps * strokes_per_lap).round(),
                    duration_h,
                    weight_kg,
                    pool_length_m,
                    laps,
                ]
            }
        };

        SensorPackage::new(kind.tag(), data)
    }

    /// Generate a batch of packages with random activities
    pub fn generate_batch(&mut self, count: usize) -> Vec<SensorPackage> {
        (0..count)
            .map(|_| {
                let kind = ActivityKind::ALL[self.rng.gen_range(0..ActivityKind::ALL.len())];
                self.generate(kind)
            })
            .collect()
    }

    fn sample_weight(&mut self) -> f64 {
        let weight = self.weight_dist.sample(&mut self.rng);
        weight.clamp(WEIGHT_RANGE_KG.0, WEIGHT_RANGE_KG.1)
    }

    fn sample_height(&mut self) -> f64 {
        let height = self.height_dist.sample(&mut self.rng);
        height.clamp(HEIGHT_RANGE_CM.0, HEIGHT_RANGE_CM.1)
    }

    /// Get current configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> PackageGenerator {
        PackageGenerator::new(GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_generated_arity() {
        let mut generator = seeded(7);

        for kind in ActivityKind::ALL {
            let package = generator.generate(kind);
            assert_eq!(package.workout_type, kind.tag());
            assert_eq!(package.data.len(), kind.arity());
        }
    }

    #[test]
    fn test_generated_values_in_range() {
        let mut generator = seeded(42);

        for package in generator.generate_batch(200) {
            let action = package.data[0];
            let duration = package.data[1];
            let weight = package.data[2];

            assert_eq!(action.fract(), 0.0);
            assert!((0.25..=2.0).contains(&duration));
            assert!((WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(&weight));

            if package.workout_type == "SWM" {
                assert!(package.data[3] == 25.0 || package.data[3] == 50.0);
                assert!(package.data[4] >= 1.0);
                assert_eq!(package.data[4].fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        let first = seeded(1234).generate_batch(20);
        let second = seeded(1234).generate_batch(20);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_spread_is_accepted() {
        let mut generator = PackageGenerator::new(GeneratorConfig {
            weight_std_kg: 0.0,
            height_std_cm: 0.0,
            seed: Some(3),
            ..GeneratorConfig::default()
        })
        .unwrap();

        let package = generator.generate(ActivityKind::SportsWalking);
        assert_eq!(package.data[2], 75.0);
        assert_eq!(package.data[3], 175.0);
    }

    #[test]
    fn test_invalid_config() {
        let config = GeneratorConfig {
            min_duration_h: 2.0,
            max_duration_h: 1.0,
            ..GeneratorConfig::default()
        };
        assert!(PackageGenerator::new(config).is_err());

        let config = GeneratorConfig {
            weight_std_kg: -1.0,
            ..GeneratorConfig::default()
        };
        assert!(PackageGenerator::new(config).is_err());

        let config = GeneratorConfig {
            height_std_cm: -0.5,
            ..GeneratorConfig::default()
        };
        assert!(PackageGenerator::new(config).is_err());

        let config = GeneratorConfig {
            weight_std_kg: f64::NAN,
            ..GeneratorConfig::default()
        };
        assert!(PackageGenerator::new(config).is_err());

        let config = GeneratorConfig {
            pool_lengths_m: Vec::new(),
            ..GeneratorConfig::default()
        };
        assert!(PackageGenerator::new(config).is_err());
    }
}
