// ABOUTME: Environment configuration tests for tracker and logging settings
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use workout_tracker::config::TrackerConfig;
use workout_tracker::errors::ErrorCode;
use workout_tracker::formatters::OutputFormat;
use workout_tracker::logging::{LogFormat, LoggingConfig};

const OUTPUT_FORMAT_VAR: &str = "WORKOUT_OUTPUT_FORMAT";

#[test]
#[serial]
fn test_default_output_format_is_text() {
    env::remove_var(OUTPUT_FORMAT_VAR);

    let config = TrackerConfig::from_env().unwrap();

    assert_eq!(config.output_format, OutputFormat::Text);
    assert!(config.summary().contains("text/plain"));
}

#[test]
#[serial]
fn test_output_format_from_environment() {
    env::set_var(OUTPUT_FORMAT_VAR, "JSON");

    let config = TrackerConfig::from_env().unwrap();
    env::remove_var(OUTPUT_FORMAT_VAR);

    assert_eq!(config.output_format, OutputFormat::Json);
}

#[test]
#[serial]
fn test_blank_output_format_is_ignored() {
    env::set_var(OUTPUT_FORMAT_VAR, "  ");

    let config = TrackerConfig::from_env().unwrap();
    env::remove_var(OUTPUT_FORMAT_VAR);

    assert_eq!(config, TrackerConfig::default());
}

#[test]
#[serial]
fn test_invalid_output_format_is_a_config_error() {
    env::set_var(OUTPUT_FORMAT_VAR, "yaml");

    let err = TrackerConfig::from_env().unwrap_err();
    env::remove_var(OUTPUT_FORMAT_VAR);

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert_eq!(err.exit_code(), 78);
    assert_eq!(err.context.resource_id.as_deref(), Some(OUTPUT_FORMAT_VAR));
}

#[test]
fn test_command_line_override_wins() {
    let config = TrackerConfig::default().with_output_format(OutputFormat::Json);

    assert_eq!(config.output_format, OutputFormat::Json);
}

#[test]
#[serial]
fn test_logging_config_from_environment() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.environment, "production");
}

#[test]
#[serial]
fn test_logging_defaults_stay_quiet() {
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("LOG_INCLUDE_LOCATION");
    env::remove_var("LOG_INCLUDE_THREAD");
    env::remove_var("SERVICE_NAME");
    env::remove_var("RUST_LOG");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "workout-tracker");
    assert_eq!(config.verbose().level, "debug");
}
