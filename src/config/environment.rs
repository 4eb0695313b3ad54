// ABOUTME: Environment-based configuration for the workout tracker
// ABOUTME: Loads output settings from environment variables with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use tracing::info;
use workout_core::constants::env_config;
use workout_core::errors::{AppError, AppResult};
use workout_core::formatters::OutputFormat;

/// Runtime settings for rendering workout summaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Format every summary line is rendered in
    pub output_format: OutputFormat,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ConfigInvalid` if a variable holds a value that
    /// does not parse
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(format) = env_var_opt(env_config::OUTPUT_FORMAT)? {
            config.output_format = format.parse::<OutputFormat>().map_err(|e| {
                AppError::config(format!("Invalid {}: {}", env_config::OUTPUT_FORMAT, e.message))
                    .with_resource_id(env_config::OUTPUT_FORMAT)
            })?;
        }

        info!(output.format = %config.output_format, "Tracker configuration loaded");
        Ok(config)
    }

    /// Replace the output format (command line override)
    #[must_use]
    pub const fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// One-line description for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Workout Tracker Configuration: output format {} ({})",
            self.output_format,
            self.output_format.content_type()
        )
    }
}

/// Read an optional environment variable, treating empty values as unset
fn env_var_opt(name: &str) -> AppResult<Option<String>> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_owned())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e @ env::VarError::NotUnicode(_)) => Err(AppError::config(format!(
            "Invalid {name}: {e}"
        ))
        .with_resource_id(name)),
    }
}
