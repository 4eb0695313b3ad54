// ABOUTME: Summary message produced once per workout
// ABOUTME: Holds the computed duration, distance, speed and calories with the text rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed metrics for one completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMessage {
    /// Workout type name (e.g. `"Running"`)
    pub training_type: String,
    /// Duration in hours
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Energy spent in kcal
    pub calories_kcal: f64,
}

impl SummaryMessage {
    /// Human-readable single line summary, every number with three decimals
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Spent kcal: {:.3}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

impl fmt::Display for SummaryMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swimming_summary() -> SummaryMessage {
        SummaryMessage {
            training_type: "Swimming".to_owned(),
            duration_hours: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        }
    }

    #[test]
    fn test_message_renders_three_decimals() {
        assert_eq!(
            swimming_summary().message(),
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Spent kcal: 336.000."
        );
    }

    #[test]
    fn test_display_matches_message() {
        let summary = swimming_summary();
        assert_eq!(summary.to_string(), summary.message());
    }
}
