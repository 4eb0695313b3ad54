// ABOUTME: Sports walking workout calculator
// ABOUTME: Step-based distance and a weight and height based calorie estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use workout_core::models::WorkoutType;

use super::physiological_constants::walking::{SPEED_HEIGHT_MULTIPLIER, WEIGHT_MULTIPLIER};
use super::training::{TrainingSession, WorkoutMetrics};

/// Sports walking session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    session: TrainingSession,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a walking workout; `height_cm` must be positive
    #[must_use]
    pub const fn new(session: TrainingSession, height_cm: f64) -> Self {
        Self { session, height_cm }
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// `speed² / height`, floored to a whole number
    fn speed_height_ratio(&self) -> f64 {
        self.mean_speed_kmh().powi(2).div_euclid(self.height_cm)
    }
}

impl WorkoutMetrics for SportsWalking {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::SportsWalking;

    fn session(&self) -> &TrainingSession {
        &self.session
    }

    /// `(0.035 x weight + floor(speed² / height) x 0.029 x weight) x minutes`
    ///
    /// The ratio is floored, so for realistic speeds the second term is zero.
    fn spent_calories(&self) -> f64 {
        let weight = self.session.weight_kg;
        (WEIGHT_MULTIPLIER * weight + self.speed_height_ratio() * SPEED_HEIGHT_MULTIPLIER * weight)
            * self.session.duration_minutes()
    }
}
