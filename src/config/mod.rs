// ABOUTME: Configuration management module for tracker settings
// ABOUTME: Environment-only configuration with command line overrides applied by the binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment configuration
pub mod environment;

pub use environment::TrackerConfig;
