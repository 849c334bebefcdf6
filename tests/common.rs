// ABOUTME: Shared test utilities for training metrics integration tests
// ABOUTME: Float comparison and report-line parsing helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_training_metrics`

/// Tolerance for comparing values computed by the same formula
pub const FORMULA_EPSILON: f64 = 1e-9;

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (±{tolerance}), got {actual}"
    );
}

/// Numeric fields of an English report line
#[derive(Debug, Clone, Copy)]
pub struct ParsedReport {
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

/// Extract the number that follows `key` and ends at the first space or ';'
fn number_after(message: &str, key: &str) -> f64 {
    let start = message
        .find(key)
        .unwrap_or_else(|| panic!("'{key}' missing from '{message}'"))
        + key.len();
    let tail = &message[start..];
    let end = tail.find([' ', ';']).unwrap_or(tail.len());
    tail[..end]
        .trim_end_matches('.')
        .parse()
        .expect("numeric field")
}

/// Parse the numbers back out of an English report line
pub fn parse_report(message: &str) -> ParsedReport {
    ParsedReport {
        duration: number_after(message, "Duration: "),
        distance: number_after(message, "Distance: "),
        speed: number_after(message, "Avg. speed: "),
        calories: number_after(message, "Calories burned: "),
    }
}
