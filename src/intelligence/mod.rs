// ABOUTME: Workout metric calculators for distance, mean speed and spent calories
// ABOUTME: Organizes the shared session model, per-workout formulas and enum dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout Intelligence Module
//!
//! Each workout type implements [`WorkoutMetrics`]; [`Workout`] is the sum
//! type the factory produces and the runner consumes.
//!
//! # Example
//!
//! ```rust
//! use workout_tracker::intelligence::{Running, TrainingSession, Workout};
//!
//! let workout = Workout::from(Running::new(TrainingSession::new(15000, 1.0, 75.0)));
//! assert!((workout.distance_km() - 9.75).abs() < 1e-9);
//! ```

/// Calorie and stride coefficients
pub mod physiological_constants;
/// Running calculator
pub mod running;
/// Sports walking calculator
pub mod sports_walking;
/// Pool swimming calculator
pub mod swimming;
/// Shared session data and the metrics trait
pub mod training;
/// Enum dispatch over all workout types
pub mod workout;

pub use running::Running;
pub use sports_walking::SportsWalking;
pub use swimming::Swimming;
pub use training::{TrainingSession, WorkoutMetrics};
pub use workout::Workout;
