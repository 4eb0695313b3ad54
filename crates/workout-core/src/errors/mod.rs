// ABOUTME: Unified error handling for workout metric calculation and the command line driver
// ABOUTME: Defines ErrorCode, AppError, ErrorContext and the serializable ErrorResponse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for the workout
//! tracker. It defines standard error codes, the `AppError` type returned by
//! every fallible operation, and the process exit status each code maps to.
//! Library code only ever returns these errors; translating them into a
//! process exit is the binary's job.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Workout packages (1000-1999)
    /// Package code not in the workout table
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType = 1000,
    /// Package value count does not match the workout layout
    #[serde(rename = "INVALID_ARITY")]
    InvalidArity = 1001,

    // Validation (3000-3999)
    /// Input rejected by validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Text that does not parse
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric value outside its allowed range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Environment configuration does not parse
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Serialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status for this error (sysexits-style for non-input failures)
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownWorkoutType
            | Self::InvalidArity
            | Self::InvalidInput
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 1,

            // EX_CONFIG
            Self::ConfigInvalid => 78,

            // EX_SOFTWARE
            Self::InternalError | Self::SerializationError => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "An unexpected workout type",
            Self::InvalidArity => "The workout package has the wrong number of values",
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Offending resource (package code, field name, env variable)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Machine-readable error report (emitted by the binary in JSON output mode)
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Error payload of an `ErrorResponse`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Offending resource, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Additional context
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                resource_id: error.context.resource_id,
                details: error.context.details,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Package code is not one of the supported workout types
    pub fn unknown_workout_type(code: impl Into<String>, valid_codes: &[&str]) -> Self {
        let code = code.into();
        Self::new(
            ErrorCode::UnknownWorkoutType,
            format!(
                "Unknown workout type '{code}'. Valid codes: {}",
                valid_codes.join(", ")
            ),
        )
        .with_resource_id(code)
    }

    /// Package carries the wrong number of values for its workout type
    pub fn invalid_arity(workout: &str, expected_fields: &[&str], received: usize) -> Self {
        Self::new(
            ErrorCode::InvalidArity,
            format!(
                "{workout} expects {} values [{}], got {received}",
                expected_fields.len(),
                expected_fields.join(", ")
            ),
        )
        .with_resource_id(workout)
        .with_details(serde_json::json!({
            "expected": expected_fields,
            "received": received
        }))
    }

    /// A package value violates its field's range
    pub fn value_out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message).with_resource_id(field)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed textual input
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Invalid configuration value
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Conversion from `anyhow::Error` to `AppError`
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        // Keep the first cause visible in the details
        match error.chain().nth(1) {
            Some(cause) => Self::internal(error.to_string()).with_details(serde_json::json!({
                "source": cause.to_string()
            })),
            None => Self::internal(error.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::internal(format!("I/O failure: {error}")).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_error_code_exit_code() {
        assert_eq!(ErrorCode::UnknownWorkoutType.exit_code(), 1);
        assert_eq!(ErrorCode::InvalidArity.exit_code(), 1);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::InternalError.exit_code(), 70);
    }

    #[test]
    fn test_unknown_workout_type_message() {
        let error = AppError::unknown_workout_type("XYZ", &["SWM", "RUN", "WLK"]);

        assert_eq!(error.code, ErrorCode::UnknownWorkoutType);
        assert_eq!(error.context.resource_id.as_deref(), Some("XYZ"));
        assert_eq!(
            error.to_string(),
            "An unexpected workout type: Unknown workout type 'XYZ'. Valid codes: SWM, RUN, WLK"
        );
    }

    #[test]
    fn test_invalid_arity_details() {
        let error = AppError::invalid_arity("Running", &["action", "duration_hours", "weight_kg"], 2);

        assert_eq!(error.code, ErrorCode::InvalidArity);
        assert!(error.message.contains("expects 3 values"));
        assert_eq!(error.context.details["received"], 2);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::unknown_workout_type("XYZ", &["SWM"]);
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("UNKNOWN_WORKOUT_TYPE"));
        assert!(json.contains("\"resource_id\":\"XYZ\""));
    }

    #[test]
    fn test_anyhow_conversion_keeps_cause() {
        let inner = std::io::Error::other("disk gone");
        let error: AppError = anyhow::Error::new(inner).context("writing summary").into();

        assert_eq!(error.code, ErrorCode::InternalError);
        assert_eq!(error.message, "writing summary");
        assert_eq!(error.context.details["source"], "disk gone");
    }
}
