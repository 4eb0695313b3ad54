// ABOUTME: Core types and constants for the workout tracker
// ABOUTME: Foundation crate with error handling, workout type catalog, summaries and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `ErrorResponse`
//! - **constants**: Unit conversions, package codes and service names
//! - **models**: `WorkoutType` catalog and the `SummaryMessage` produced per workout
//! - **formatters**: Output format abstraction (text, JSON) for summaries

/// Unified error handling system with standard error codes and exit statuses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutType`, `SummaryMessage`)
pub mod models;

/// Output format abstraction (text, JSON) for workout summaries
pub mod formatters;
