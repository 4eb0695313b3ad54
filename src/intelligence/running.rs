// ABOUTME: Running workout calculator
// ABOUTME: Step-based distance and a speed-scaled calorie estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use workout_core::constants::units::METERS_PER_KM;
use workout_core::models::WorkoutType;

use super::physiological_constants::running::{SPEED_MULTIPLIER, SPEED_SHIFT};
use super::training::{TrainingSession, WorkoutMetrics};

/// Running session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    session: TrainingSession,
}

impl Running {
    /// Create a running workout from session data
    #[must_use]
    pub const fn new(session: TrainingSession) -> Self {
        Self { session }
    }
}

impl WorkoutMetrics for Running {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::Running;

    fn session(&self) -> &TrainingSession {
        &self.session
    }

    /// `(18 x speed - 20) x weight / 1000 x minutes`
    fn spent_calories(&self) -> f64 {
        (SPEED_MULTIPLIER * self.mean_speed_kmh() - SPEED_SHIFT) * self.session.weight_kg
            / METERS_PER_KM
            * self.session.duration_minutes()
    }
}
