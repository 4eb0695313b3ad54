// ABOUTME: Shared training session data and the per-workout metrics capability
// ABOUTME: Default distance and speed formulas; calories are supplied by every workout type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use workout_core::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use workout_core::models::{SummaryMessage, WorkoutType};

use super::physiological_constants::stride::STEP_LENGTH_M;

/// Raw sensor data common to every workout
///
/// Values are validated by the factory before construction: all finite and
/// non-negative, with a strictly positive duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Steps taken or strokes made
    pub action_count: u32,
    /// Session length in hours
    pub duration_hours: f64,
    /// Athlete body weight in kilograms
    pub weight_kg: f64,
}

impl TrainingSession {
    /// Create session data from validated sensor values
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    /// Session length in minutes
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration_hours * MINUTES_PER_HOUR
    }
}

/// Metric formulas implemented by each workout type
///
/// `spent_calories` has no default: every workout type must provide its own
/// estimate. Distance and speed default to the step-length model.
pub trait WorkoutMetrics {
    /// Catalog entry for this workout
    const WORKOUT_TYPE: WorkoutType;

    /// Distance covered per action, in meters
    const ACTION_LENGTH_M: f64 = STEP_LENGTH_M;

    /// Shared session data
    fn session(&self) -> &TrainingSession;

    /// Distance covered in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.session().action_count) * Self::ACTION_LENGTH_M / METERS_PER_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours
    }

    /// Energy spent in kcal
    fn spent_calories(&self) -> f64;

    /// Bundle the computed metrics into a summary message
    fn summary(&self) -> SummaryMessage {
        SummaryMessage {
            training_type: Self::WORKOUT_TYPE.display_name().to_owned(),
            duration_hours: self.session().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}
