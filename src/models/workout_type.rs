// ABOUTME: Workout type enumeration for the three supported disciplines
// ABOUTME: Maps sensor tag codes (RUN, WLK, SWM) to variants and localized display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;
use crate::formatters::Locale;

/// Closed set of workout disciplines reported by the sensors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running session (steps)
    Running,
    /// Sports walking session (steps, height-dependent calories)
    SportsWalking,
    /// Pool swimming session (strokes, pool-based speed)
    Swimming,
}

impl WorkoutType {
    /// Every supported workout type, in tag-table order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Sensor tag code for this workout type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Resolve a sensor tag code; codes are case-sensitive
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Number of positional parameters the sensor package carries
    #[must_use]
    pub const fn parameter_count(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }

    /// Positional parameter names, used in validation messages
    #[must_use]
    pub const fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action_count", "duration_hours", "weight_kg"],
            Self::SportsWalking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
            Self::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lap_count",
            ],
        }
    }

    /// Human-readable training type label
    #[must_use]
    pub const fn label(&self, locale: Locale) -> &'static str {
        match (*self, locale) {
            (Self::Running, Locale::En) => "Running",
            (Self::SportsWalking, Locale::En) => "Sports walking",
            (Self::Swimming, Locale::En) => "Swimming",
            (Self::Running, Locale::Ru) => "Бег",
            (Self::SportsWalking, Locale::Ru) => "Спортивная ходьба",
            (Self::Swimming, Locale::Ru) => "Плавание",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| AppError::unknown_workout_type(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_codes_round_trip() {
        for kind in WorkoutType::ALL {
            assert_eq!(kind.code().parse::<WorkoutType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let err = "run".parse::<WorkoutType>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownWorkoutType);
    }

    #[test]
    fn test_parameter_names_match_count() {
        for kind in WorkoutType::ALL {
            assert_eq!(kind.parameter_names().len(), kind.parameter_count());
        }
    }
}
