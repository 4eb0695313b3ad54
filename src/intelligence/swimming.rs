// ABOUTME: Pool swimming workout calculator
// ABOUTME: Stroke-based distance, lap-based speed and a speed and weight calorie estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use workout_core::constants::units::METERS_PER_KM;
use workout_core::models::WorkoutType;

use super::physiological_constants::stride::STROKE_LENGTH_M;
use super::physiological_constants::swimming::{SPEED_SHIFT, WEIGHT_MULTIPLIER};
use super::training::{TrainingSession, WorkoutMetrics};

/// Pool swimming session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    session: TrainingSession,
    pool_length_m: f64,
    pool_lap_count: u32,
}

impl Swimming {
    /// Create a swimming workout from session data and pool geometry
    #[must_use]
    pub const fn new(session: TrainingSession, pool_length_m: f64, pool_lap_count: u32) -> Self {
        Self {
            session,
            pool_length_m,
            pool_lap_count,
        }
    }

    /// Pool length in meters
    #[must_use]
    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn pool_lap_count(&self) -> u32 {
        self.pool_lap_count
    }
}

impl WorkoutMetrics for Swimming {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::Swimming;
    const ACTION_LENGTH_M: f64 = STROKE_LENGTH_M;

    fn session(&self) -> &TrainingSession {
        &self.session
    }

    /// Speed from pool laps; the stroke count does not enter it
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lap_count)
            / METERS_PER_KM
            / self.session.duration_hours
    }

    /// `(speed + 1.1) x 2 x weight`
    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SPEED_SHIFT) * WEIGHT_MULTIPLIER * self.session.weight_kg
    }
}
