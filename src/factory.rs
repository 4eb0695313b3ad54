// ABOUTME: Workout factory turning a coded sensor package into a validated workout
// ABOUTME: Explicit constructor table with arity and range validation at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Factory
//!
//! A sensor package is a workout code plus an ordered list of numbers whose
//! meaning depends on the code:
//!
//! | Code | Values |
//! |---|---|
//! | `SWM` | action, duration_hours, weight_kg, pool_length_m, pool_lap_count |
//! | `RUN` | action, duration_hours, weight_kg |
//! | `WLK` | action, duration_hours, weight_kg, height_cm |
//!
//! Unknown codes, wrong value counts and out-of-range values are returned as
//! `AppError`s; nothing here terminates the process.

use tracing::debug;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::WorkoutType;

use crate::intelligence::{Running, SportsWalking, Swimming, TrainingSession, Workout};

/// Constructor table entry for one workout type
struct WorkoutBlueprint {
    workout_type: WorkoutType,
    build: fn(&PackageValues<'_>) -> AppResult<Workout>,
}

/// Package table, in the order codes are reported to users
static BLUEPRINTS: [WorkoutBlueprint; 3] = [
    WorkoutBlueprint {
        workout_type: WorkoutType::Swimming,
        build: build_swimming,
    },
    WorkoutBlueprint {
        workout_type: WorkoutType::Running,
        build: build_running,
    },
    WorkoutBlueprint {
        workout_type: WorkoutType::SportsWalking,
        build: build_sports_walking,
    },
];

/// Build a workout from a package code and its positional values
///
/// # Errors
///
/// Returns `AppError` with:
/// - `UnknownWorkoutType` if `code` is not one of the supported codes
/// - `InvalidArity` if `data` has the wrong number of values for the code
/// - `ValueOutOfRange` if a value is negative, non-finite, not a whole
///   number where a count is expected, or zero for duration or height
pub fn read_package(code: &str, data: &[f64]) -> AppResult<Workout> {
    let Some(blueprint) = BLUEPRINTS
        .iter()
        .find(|blueprint| blueprint.workout_type.code() == code)
    else {
        debug!(package.code = %code, "Rejected package with unknown workout type");
        return Err(AppError::unknown_workout_type(code, &supported_codes()));
    };

    let workout_type = blueprint.workout_type;
    let fields = workout_type.package_fields();
    if data.len() != fields.len() {
        debug!(
            package.code = %code,
            expected = fields.len(),
            received = data.len(),
            "Rejected package with wrong arity"
        );
        return Err(AppError::invalid_arity(
            workout_type.display_name(),
            fields,
            data.len(),
        ));
    }

    let workout = (blueprint.build)(&PackageValues { fields, data })?;
    debug!(package.code = %code, workout = %workout_type, "Package accepted");
    Ok(workout)
}

/// Workout types accepted by [`read_package`], in table order
pub fn supported_types() -> impl Iterator<Item = WorkoutType> {
    BLUEPRINTS.iter().map(|blueprint| blueprint.workout_type)
}

/// Workout codes accepted by [`read_package`], in table order
#[must_use]
pub fn supported_codes() -> Vec<&'static str> {
    supported_types().map(|workout_type| workout_type.code()).collect()
}

/// Positional package values addressed by field index
struct PackageValues<'a> {
    fields: &'static [&'static str],
    data: &'a [f64],
}

impl PackageValues<'_> {
    /// Finite, non-negative measurement
    fn measure(&self, index: usize) -> AppResult<f64> {
        let (field, value) = (self.fields[index], self.data[index]);
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::value_out_of_range(
                field,
                format!("{field} must be a finite non-negative number, got {value}"),
            ));
        }
        Ok(value)
    }

    /// Strictly positive measurement (divisors)
    fn positive(&self, index: usize) -> AppResult<f64> {
        let value = self.measure(index)?;
        if value == 0.0 {
            let field = self.fields[index];
            return Err(AppError::value_out_of_range(
                field,
                format!("{field} must be greater than zero"),
            ));
        }
        Ok(value)
    }

    /// Whole, non-negative count that fits in `u32`
    fn count(&self, index: usize) -> AppResult<u32> {
        let value = self.measure(index)?;
        if value.fract() != 0.0 || value > f64::from(u32::MAX) {
            let field = self.fields[index];
            return Err(AppError::value_out_of_range(
                field,
                format!("{field} must be a whole number between 0 and {}, got {value}", u32::MAX),
            ));
        }
        // Whole and within u32 range, checked above
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(value as u32)
    }

    /// Leading `[action, duration_hours, weight_kg]` shared by every package
    fn session(&self) -> AppResult<TrainingSession> {
        Ok(TrainingSession::new(
            self.count(0)?,
            self.positive(1)?,
            self.measure(2)?,
        ))
    }
}

fn build_swimming(values: &PackageValues<'_>) -> AppResult<Workout> {
    Ok(Swimming::new(values.session()?, values.measure(3)?, values.count(4)?).into())
}

fn build_running(values: &PackageValues<'_>) -> AppResult<Workout> {
    Ok(Running::new(values.session()?).into())
}

fn build_sports_walking(values: &PackageValues<'_>) -> AppResult<Workout> {
    Ok(SportsWalking::new(values.session()?, values.positive(3)?).into())
}
