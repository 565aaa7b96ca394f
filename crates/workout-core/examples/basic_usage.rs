//! Basic usage examples for workout-core
//!
//! Builds each activity by hand, inspects the derived values and renders the
//! report line.

use workout_core::{
    format_message, Running, SportsWalking, Swimming, Training, Workout, WorkoutError, WorkoutResult,
};

fn main() -> WorkoutResult<()> {
    println!("=== workout-core Basic Usage Examples ===\n");

    // Example 1: Individual activities
    activity_example()?;

    // Example 2: Working through the Workout enum
    workout_enum_example()?;

    // Example 3: Validation failures
    validation_example();

    println!("=== All examples completed successfully! ===");
    Ok(())
}

/// Example 1: Computing values for each activity
fn activity_example() -> WorkoutResult<()> {
    println!("1. Activity Formulas");

    let running = Running::new(15000, 1.0, 75.0)?;
    let result = running.computed();
    println!("   Running: {:.3} km at {:.3} km/h, {:.3} kcal",
             result.distance_km, result.mean_speed_kmh, result.calories_kcal);

    let walking = SportsWalking::new(9000, 1.0, 75.0, 180.0)?;
    println!("   Walking calories: {:.3} kcal", walking.spent_calories());

    let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40)?;
    println!("   Swimming speed from laps: {:.3} km/h\n", swimming.mean_speed_kmh());

    Ok(())
}

/// Example 2: Uniform handling of any activity
fn workout_enum_example() -> WorkoutResult<()> {
    println!("2. Report Lines");

    let workouts: Vec<Workout> = vec![
        Swimming::new(720, 1.0, 80.0, 25.0, 40)?.into(),
        Running::new(15000, 1.0, 75.0)?.into(),
        SportsWalking::new(9000, 1.0, 75.0, 180.0)?.into(),
    ];

    for workout in &workouts {
        println!("   {}", workout.show_training_info());
    }

    println!("   {}\n", format_message("Custom", 0.5, 3.0, 6.0, 250.0));
    Ok(())
}

/// Example 3: Invalid inputs are rejected before a record exists
fn validation_example() {
    println!("3. Validation");

    match Running::new(15000, 0.0, 75.0) {
        Err(WorkoutError::InvalidFieldValue { field, reason, .. }) => {
            println!("   Rejected {}: {}\n", field, reason);
        }
        other => println!("   Unexpected result: {:?}\n", other),
    }
}
