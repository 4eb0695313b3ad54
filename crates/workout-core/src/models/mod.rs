// ABOUTME: Core data models shared by the calculators and formatters
// ABOUTME: Re-exports the workout type catalog and the per-workout summary message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Workout type catalog (package codes, display names, field layouts)
pub mod workout_type;

/// Computed summary for one workout
pub mod summary;

pub use summary::SummaryMessage;
pub use workout_type::WorkoutType;
