// ABOUTME: Workout type enumeration for sensor packages
// ABOUTME: Maps package codes to workout types, display names and positional field layouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::workout_codes;

/// Enumeration of supported workout types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Swimming in a pool
    Swimming,
    /// Running
    Running,
    /// Sports (race) walking
    SportsWalking,
}

impl WorkoutType {
    /// Package code identifying this workout type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Swimming => workout_codes::SWIMMING,
            Self::Running => workout_codes::RUNNING,
            Self::SportsWalking => workout_codes::SPORTS_WALKING,
        }
    }

    /// Name shown in summaries
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Positional layout of the values in a package of this type
    #[must_use]
    pub const fn package_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &[
                "action",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lap_count",
            ],
            Self::Running => &["action", "duration_hours", "weight_kg"],
            Self::SportsWalking => &["action", "duration_hours", "weight_kg", "height_cm"],
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_codes_are_upper_case_package_tags() {
        assert_eq!(WorkoutType::Swimming.code(), "SWM");
        assert_eq!(WorkoutType::Running.code(), "RUN");
        assert_eq!(WorkoutType::SportsWalking.code(), "WLK");
    }

    #[test]
    fn test_package_fields_layouts() {
        assert_eq!(WorkoutType::Running.package_fields().len(), 3);
        assert_eq!(WorkoutType::SportsWalking.package_fields()[3], "height_cm");
        assert_eq!(WorkoutType::Swimming.package_fields()[4], "pool_lap_count");
    }

    #[test]
    fn test_display_uses_summary_name() {
        assert_eq!(WorkoutType::SportsWalking.to_string(), "SportsWalking");
    }
}
