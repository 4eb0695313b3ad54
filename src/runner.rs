// ABOUTME: Package runner feeding sensor packages through the factory and formatter
// ABOUTME: Writes one rendered summary line per package and stops at the first error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use workout_core::constants::workout_codes;
use workout_core::errors::{AppError, AppResult};
use workout_core::formatters::{format_summary, OutputFormat};

use crate::factory::read_package;

/// One coded sensor package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Workout code (`SWM`, `RUN`, `WLK`)
    pub code: String,
    /// Positional values for the workout code
    pub data: Vec<f64>,
}

impl Package {
    /// Create a package from a code and its values
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.data.iter().map(ToString::to_string).collect();
        write!(f, "{}:{}", self.code, values.join(","))
    }
}

/// Parses `CODE:v1,v2,...`
impl FromStr for Package {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, values) = s.split_once(':').ok_or_else(|| {
            AppError::invalid_format(format!("Package '{s}' must look like CODE:v1,v2,..."))
        })?;

        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::invalid_format(format!(
                "Package '{s}' has an empty workout code"
            )));
        }

        if values.trim().is_empty() {
            return Ok(Self::new(code, Vec::new()));
        }

        let data = values
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(index, value)| {
                if value.is_empty() {
                    return Err(AppError::invalid_format(format!(
                        "Package '{s}': value {} is empty",
                        index + 1
                    )));
                }
                value.parse::<f64>().map_err(|e| {
                    AppError::invalid_format(format!("Package '{s}': '{value}' is not a number"))
                        .with_source(e)
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self::new(code, data))
    }
}

/// Reference packages: one session of each workout type
#[must_use]
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new(workout_codes::SWIMMING, vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new(workout_codes::RUNNING, vec![15000.0, 1.0, 75.0]),
        Package::new(workout_codes::SPORTS_WALKING, vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Render every package as one line on `out`
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns the first factory, formatting or write error. Lines for the
/// packages before the failing one have already been written.
pub fn run_packages<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> AppResult<usize> {
    let mut written = 0;
    for package in packages {
        debug!(package = %package, "Processing package");
        let summary = read_package(&package.code, &package.data)?.summary();
        let output = format_summary(&summary, format)?;
        writeln!(out, "{}", output.data)?;
        written += 1;
    }
    out.flush()?;

    info!(packages = written, format = %format, "Workout summaries written");
    Ok(written)
}
