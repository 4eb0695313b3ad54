// ABOUTME: Calorie and stride coefficients for the per-workout formulas
// ABOUTME: Grouped by workout type so each calculator imports only its own set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants used by the workout calculators
//!
//! These are the fixed coefficients of the calorie estimates. Changing any of
//! them changes every reported summary.

/// Stride lengths converting an action count into distance
pub mod stride {
    /// Average step length for running and walking (meters)
    pub const STEP_LENGTH_M: f64 = 0.65;

    /// Average stroke length for pool swimming (meters)
    pub const STROKE_LENGTH_M: f64 = 1.38;
}

/// Running calorie estimate coefficients
///
/// `kcal = (SPEED_MULTIPLIER x speed - SPEED_SHIFT) x weight / 1000 x minutes`
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Offset subtracted from the scaled speed
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie estimate coefficients
///
/// `kcal = (WEIGHT_MULTIPLIER x weight + floor(speed² / height) x SPEED_HEIGHT_MULTIPLIER x weight) x minutes`
pub mod walking {
    /// Baseline cost per kilogram of body weight
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier applied to the floored speed-to-height ratio
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie estimate coefficients
///
/// `kcal = (speed + SPEED_SHIFT) x WEIGHT_MULTIPLIER x weight`
pub mod swimming {
    /// Offset added to mean speed (km/h)
    pub const SPEED_SHIFT: f64 = 1.1;

    /// Multiplier applied to body weight
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
