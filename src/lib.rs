// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Workout metric calculators, package factory, runner, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Computes distance, mean speed and spent calories for running, sports
//! walking and pool swimming sessions from raw sensor packages, and renders a
//! one-line summary per session.
//!
//! ## Architecture
//!
//! - **Intelligence**: per-workout formulas behind the `WorkoutMetrics` trait
//!   and the `Workout` sum type
//! - **Factory**: package code + positional values into a validated `Workout`
//! - **Runner**: packages through factory and formatter onto a writer
//! - **Config**: environment configuration
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use workout_tracker::factory::read_package;
//!
//! let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
//! assert_eq!(workout.summary().calories_kcal.round(), 336.0);
//! # Ok::<(), workout_tracker::errors::AppError>(())
//! ```

/// Workout metric calculators
pub mod intelligence;

/// Package code to workout construction
pub mod factory;

/// Package runner writing summaries
pub mod runner;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Re-export of the core crate's error types
pub mod errors {
    pub use workout_core::errors::*;
}

/// Re-export of the core crate's models
pub mod models {
    pub use workout_core::models::*;
}

/// Re-export of the core crate's formatters
pub mod formatters {
    pub use workout_core::formatters::*;
}
