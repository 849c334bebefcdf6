// ABOUTME: Physical constants for each workout discipline (step length, calorie coefficients)
// ABOUTME: Fixed at compile time; never configurable at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Per-discipline constants used by the distance and calorie formulas.

/// Running constants
pub mod running {
    /// Stride length in meters
    pub const STEP_LENGTH_M: f64 = 0.65;

    /// Multiplier applied to mean speed (km/h) in the calorie formula
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;

    /// Shift added to the scaled mean speed in the calorie formula
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Sports walking constants
pub mod walking {
    /// Stride length in meters
    pub const STEP_LENGTH_M: f64 = 0.65;

    /// Multiplier applied to body weight in the calorie formula
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier applied to the speed/height term in the calorie formula
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming constants
pub mod swimming {
    /// Stroke length in meters
    pub const STEP_LENGTH_M: f64 = 1.38;

    /// Multiplier applied to body weight in the calorie formula
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    /// Shift added to mean speed (km/h) in the calorie formula
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
}
