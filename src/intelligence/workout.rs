// ABOUTME: Workout sum type dispatching metric calculations to the concrete workout types
// ABOUTME: Enum dispatch over running, sports walking and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use workout_core::models::{SummaryMessage, WorkoutType};

use super::running::Running;
use super::sports_walking::SportsWalking;
use super::swimming::Swimming;
use super::training::{TrainingSession, WorkoutMetrics};

/// A validated workout of any supported type
///
/// Enum dispatch keeps the built-in workout types free of vtables; each
/// method forwards to the variant's `WorkoutMetrics` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Workout {
    /// Running session
    Running(Running),
    /// Sports walking session
    SportsWalking(SportsWalking),
    /// Pool swimming session
    Swimming(Swimming),
}

impl Workout {
    /// Catalog entry for this workout
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running(_) => Running::WORKOUT_TYPE,
            Self::SportsWalking(_) => SportsWalking::WORKOUT_TYPE,
            Self::Swimming(_) => Swimming::WORKOUT_TYPE,
        }
    }

    /// Shared session data
    #[must_use]
    pub fn session(&self) -> &TrainingSession {
        match self {
            Self::Running(workout) => workout.session(),
            Self::SportsWalking(workout) => workout.session(),
            Self::Swimming(workout) => workout.session(),
        }
    }

    /// Distance covered in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Running(workout) => workout.distance_km(),
            Self::SportsWalking(workout) => workout.distance_km(),
            Self::Swimming(workout) => workout.distance_km(),
        }
    }

    /// Mean speed in km/h
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running(workout) => workout.mean_speed_kmh(),
            Self::SportsWalking(workout) => workout.mean_speed_kmh(),
            Self::Swimming(workout) => workout.mean_speed_kmh(),
        }
    }

    /// Energy spent in kcal
    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        match self {
            Self::Running(workout) => workout.spent_calories(),
            Self::SportsWalking(workout) => workout.spent_calories(),
            Self::Swimming(workout) => workout.spent_calories(),
        }
    }

    /// Summary message for this workout
    #[must_use]
    pub fn summary(&self) -> SummaryMessage {
        match self {
            Self::Running(workout) => workout.summary(),
            Self::SportsWalking(workout) => workout.summary(),
            Self::Swimming(workout) => workout.summary(),
        }
    }
}

impl From<Running> for Workout {
    fn from(workout: Running) -> Self {
        Self::Running(workout)
    }
}

impl From<SportsWalking> for Workout {
    fn from(workout: SportsWalking) -> Self {
        Self::SportsWalking(workout)
    }
}

impl From<Swimming> for Workout {
    fn from(workout: Swimming) -> Self {
        Self::Swimming(workout)
    }
}
