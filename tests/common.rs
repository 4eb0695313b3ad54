// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and the reference sensor packages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `workout_tracker`

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for comparing computed metrics
pub const EPSILON: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two metrics agree within `EPSILON`
pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{what}: expected {expected}, got {actual}"
    );
}

/// Swimming reference values: action, duration, weight, pool length, laps
pub const SWIMMING_PACKAGE: [f64; 5] = [720.0, 1.0, 80.0, 25.0, 40.0];
/// Running reference values: action, duration, weight
pub const RUNNING_PACKAGE: [f64; 3] = [15000.0, 1.0, 75.0];
/// Walking reference values: action, duration, weight, height
pub const WALKING_PACKAGE: [f64; 4] = [9000.0, 1.0, 75.0, 180.0];
