//! Sensor package dispatch
//!
//! Maps an activity tag plus positional sensor values onto a typed workout.
//! Tag and arity are checked against a static descriptor table before any
//! record is built, so a rejected package never yields a partial workout.

use workout_core::{
    validate_count, ActivityKind, Running, SensorPackage, SportsWalking, Swimming, Workout,
    WorkoutError, WorkoutResult,
};

/// Constructor from positional values, called only with exactly `arity` values
type WorkoutConstructor = fn(&[f64]) -> WorkoutResult<Workout>;

/// Dispatch table entry for one activity
#[derive(Debug, Clone, Copy)]
pub struct ActivityDescriptor {
    /// Activity produced by this entry
    pub kind: ActivityKind,
    /// Package tag that selects this entry
    pub tag: &'static str,
    /// Exact number of values the constructor consumes
    pub arity: usize,
    constructor: WorkoutConstructor,
}

/// Supported activities keyed by package tag
pub static ACTIVITY_TABLE: [ActivityDescriptor; 3] = [
    ActivityDescriptor {
        kind: ActivityKind::Swimming,
        tag: ActivityKind::Swimming.tag(),
        arity: ActivityKind::Swimming.arity(),
        constructor: build_swimming,
    },
    ActivityDescriptor {
        kind: ActivityKind::Running,
        tag: ActivityKind::Running.tag(),
        arity: ActivityKind::Running.arity(),
        constructor: build_running,
    },
    ActivityDescriptor {
        kind: ActivityKind::SportsWalking,
        tag: ActivityKind::SportsWalking.tag(),
        arity: ActivityKind::SportsWalking.arity(),
        constructor: build_sports_walking,
    },
];

impl ActivityDescriptor {
    /// Build the workout after checking the value count
    pub fn build(&self, values: &[f64]) -> WorkoutResult<Workout> {
        if values.len() != self.arity {
            return Err(WorkoutError::FieldCountMismatch {
                tag: self.tag,
                expected: self.arity,
                actual: values.len(),
            });
        }

        (self.constructor)(values)
    }
}

/// Look up the table entry for a tag
pub fn descriptor_for(tag: &str) -> WorkoutResult<&'static ActivityDescriptor> {
    ACTIVITY_TABLE
        .iter()
        .find(|descriptor| descriptor.tag == tag)
        .ok_or_else(|| WorkoutError::UnknownActivityType { tag: tag.to_string() })
}

/// Read the sensor data of one package into a workout
pub fn read_package(workout_type: &str, data: &[f64]) -> WorkoutResult<Workout> {
    descriptor_for(workout_type)?.build(data)
}

pub fn read_sensor_package(package: &SensorPackage) -> WorkoutResult<Workout> {
    read_package(&package.workout_type, &package.data)
}

// Constructors index positionally; `ActivityDescriptor::build` has already
// checked that `values.len()` equals the descriptor arity.

fn build_running(values: &[f64]) -> WorkoutResult<Workout> {
    let action = validate_count("action_count", values[0])?;
    Ok(Running::new(action, values[1], values[2])?.into())
}

fn build_sports_walking(values: &[f64]) -> WorkoutResult<Workout> {
    let action = validate_count("action_count", values[0])?;
    Ok(SportsWalking::new(action, values[1], values[2], values[3])?.into())
}

fn build_swimming(values: &[f64]) -> WorkoutResult<Workout> {
    let action = validate_count("action_count", values[0])?;
    let pool_laps = validate_count("pool_lap_count", values[4])?;
    Ok(Swimming::new(action, values[1], values[2], values[3], pool_laps)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use workout_core::Training;

    #[test]
    fn test_table_matches_activity_kinds() {
        assert_eq!(ACTIVITY_TABLE.len(), ActivityKind::ALL.len());

        for descriptor in &ACTIVITY_TABLE {
            assert_eq!(descriptor.tag, descriptor.kind.tag());
            assert_eq!(descriptor.arity, descriptor.kind.arity());
        }
    }

    #[test]
    fn test_read_each_activity() {
        let swimming = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(swimming.kind(), ActivityKind::Swimming);
        assert!(matches!(swimming, Workout::Swimming(s) if s.pool_lap_count() == 40));

        let running = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(running.kind(), ActivityKind::Running);
        assert_eq!(running.record().action_count(), 15000);

        let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!(matches!(walking, Workout::SportsWalking(w) if w.height_cm() == 180.0));
    }

    #[test]
    fn test_values_assigned_in_declaration_order() {
        let workout = read_package("SWM", &[100.0, 0.5, 60.0, 50.0, 12.0]).unwrap();
        let Workout::Swimming(swimming) = workout else {
            panic!("expected swimming, got {:?}", workout);
        };

        assert_eq!(swimming.record().action_count(), 100);
        assert_eq!(swimming.record().duration_h(), 0.5);
        assert_eq!(swimming.record().weight_kg(), 60.0);
        assert_eq!(swimming.pool_length_m(), 50.0);
        assert_eq!(swimming.pool_lap_count(), 12);
    }

    #[test]
    fn test_unknown_tags_rejected() {
        for tag in ["", "run", "SWIM", "BIKE", " RUN", "WLK "] {
            let err = read_package(tag, &[15000.0, 1.0, 75.0]).unwrap_err();
            assert_eq!(err, WorkoutError::UnknownActivityType { tag: tag.to_string() });
        }
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let cases: [(&str, &[f64], usize); 6] = [
            ("RUN", &[15000.0, 1.0], 3),
            ("RUN", &[15000.0, 1.0, 75.0, 180.0], 3),
            ("WLK", &[9000.0, 1.0, 75.0], 4),
            ("WLK", &[], 4),
            ("SWM", &[720.0, 1.0, 80.0, 25.0], 5),
            ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 1.0], 5),
        ];

        for (tag, values, expected) in cases {
            let err = read_package(tag, values).unwrap_err();
            assert_eq!(
                err,
                WorkoutError::FieldCountMismatch {
                    tag: descriptor_for(tag).unwrap().tag,
                    expected,
                    actual: values.len(),
                }
            );
        }
    }

    #[test]
    fn test_descriptor_build_checks_arity_first() {
        for descriptor in &ACTIVITY_TABLE {
            let short = vec![1.0; descriptor.arity - 1];
            let err = descriptor.build(&short).unwrap_err();
            assert_eq!(
                err,
                WorkoutError::FieldCountMismatch {
                    tag: descriptor.tag,
                    expected: descriptor.arity,
                    actual: descriptor.arity - 1,
                }
            );

            let long = vec![1.0; descriptor.arity + 1];
            assert!(matches!(
                descriptor.build(&long),
                Err(WorkoutError::FieldCountMismatch { .. })
            ));

            let exact = vec![1.0; descriptor.arity];
            assert_eq!(descriptor.build(&exact).unwrap().kind(), descriptor.kind);
        }
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = read_package("RUN", &[15000.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidFieldValue { field: "action_count", .. }));

        let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidFieldValue { field: "duration_h", .. }));

        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -40.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidFieldValue { field: "pool_lap_count", .. }));
    }

    #[test]
    fn test_read_sensor_package() {
        let package = SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]);
        let workout = read_sensor_package(&package).unwrap();
        assert_eq!(workout.kind(), ActivityKind::SportsWalking);
    }
}
