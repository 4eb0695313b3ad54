// ABOUTME: Output format abstraction for rendering workout summaries
// ABOUTME: Supports the fixed-precision text line (default) and compact JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Summaries are rendered either as the human-readable text line or as JSON
//! for downstream tooling.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workout_core::formatters::{format_summary, OutputFormat};
//!
//! let output = format_summary(&summary, OutputFormat::Json)?;
//! println!("{}", output.data);
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::SummaryMessage;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Fixed-precision text line (default)
    #[default]
    Text,
    /// Compact JSON object per summary
    Json,
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

/// Formatted output containing the rendered data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered summary
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Render a summary in the requested format
///
/// # Errors
///
/// Returns `AppError` with `SerializationError` if JSON encoding fails
pub fn format_summary(
    summary: &SummaryMessage,
    format: OutputFormat,
) -> Result<FormattedOutput, AppError> {
    let data = match format {
        OutputFormat::Text => summary.message(),
        OutputFormat::Json => serde_json::to_string(summary)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}
