// ABOUTME: End-to-end tests for the workout-tracker binary
// ABOUTME: Checks stdout summaries, stderr diagnostics and process exit statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::{Command, Output};

fn tracker(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_workout-tracker"))
        .args(args)
        .env_remove("WORKOUT_OUTPUT_FORMAT")
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT")
        .env_remove("ENVIRONMENT")
        .output()
        .expect("failed to spawn workout-tracker")
}

#[test]
fn test_sample_run_prints_three_summaries() {
    let output = tracker(&[]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Training type: Swimming;"));
    assert!(lines[1].ends_with("Spent kcal: 699.750."));
    assert!(lines[2].contains("Mean speed: 5.850 km/h"));
}

#[test]
fn test_custom_packages_in_json() {
    let output = tracker(&["--workout", "RUN:15000,1,75", "--format", "json"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["training_type"], "Running");
    assert!((value["distance_km"].as_f64().unwrap() - 9.75).abs() < 1e-9);
}

#[test]
fn test_unknown_workout_type_exits_with_status_one() {
    let output = tracker(&["--workout", "XYZ:1,1,1"]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("error: An unexpected workout type: Unknown workout type 'XYZ'"));
}

#[test]
fn test_rejected_package_prints_one_diagnostic_line() {
    let output = tracker(&["--workout", "XYZ:1,1,1"]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 1, "unexpected stderr: {stderr}");
    assert!(lines[0].starts_with("error: "));
}

#[test]
fn test_json_mode_reports_error_as_json() {
    let output = tracker(&["--workout", "RUN:15000,1", "--format", "json"]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report = stderr
        .lines()
        .find_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .expect("no JSON error report on stderr");
    assert_eq!(report["error"]["code"], "INVALID_ARITY");
}

#[test]
fn test_invalid_environment_format_exits_with_config_status() {
    let output = Command::new(env!("CARGO_BIN_EXE_workout-tracker"))
        .env("WORKOUT_OUTPUT_FORMAT", "yaml")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(78));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_list_types() {
    let output = tracker(&["--list-types"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    let codes: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(codes, ["SWM", "RUN", "WLK"]);
    assert!(stdout.contains("pool_lap_count"));
}

#[test]
fn test_malformed_argument_is_a_usage_error() {
    let output = tracker(&["--workout", "RUN"]);

    assert_eq!(output.status.code(), Some(2));
}
