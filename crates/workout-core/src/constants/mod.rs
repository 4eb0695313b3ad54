// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, workout package codes and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Unit conversion constants
pub mod units {
    /// Meters in one kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Package codes identifying the workout type of a sensor package
pub mod workout_codes {
    /// Swimming package
    pub const SWIMMING: &str = "SWM";
    /// Running package
    pub const RUNNING: &str = "RUN";
    /// Sports walking package
    pub const SPORTS_WALKING: &str = "WLK";
}

/// Service names for structured logging
pub mod service_names {
    /// Command line tracker
    pub const WORKOUT_TRACKER: &str = "workout-tracker";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Output format for summaries (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "WORKOUT_OUTPUT_FORMAT";
}
