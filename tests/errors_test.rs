// ABOUTME: Integration tests for the unified error types
// ABOUTME: Error codes, constructors and JSON error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used)]

use pierre_training_metrics::errors::{AppError, ErrorCode, ErrorResponse};

#[test]
fn test_constructors_set_codes() {
    assert_eq!(AppError::invalid_input("x").code, ErrorCode::InvalidInput);
    assert_eq!(AppError::invalid_format("x").code, ErrorCode::InvalidFormat);
    assert_eq!(AppError::domain("x").code, ErrorCode::DomainError);
    assert_eq!(
        AppError::unknown_workout_type("XYZ").code,
        ErrorCode::UnknownWorkoutType
    );
    assert_eq!(AppError::config("x").code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_unknown_workout_type_lists_valid_tags() {
    let error = AppError::unknown_workout_type("XYZ");
    for tag in ["SWM", "RUN", "WLK"] {
        assert!(error.message.contains(tag));
    }
}

#[test]
fn test_error_response_serialization() {
    let error = AppError::domain("duration_hours must be positive, got 0");
    let response = ErrorResponse::for_package(&error, "RUN");

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("DOMAIN_ERROR"));
    assert!(json.contains("\"workout_type\":\"RUN\""));
}

#[test]
fn test_error_response_round_trips_code() {
    let error = AppError::unknown_workout_type("XYZ");
    let json = serde_json::to_string(&ErrorResponse::for_package(&error, "XYZ")).unwrap();
    let parsed: ErrorResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.error.code, ErrorCode::UnknownWorkoutType);
    assert_eq!(parsed.error.workout_type, "XYZ");
}

#[test]
fn test_source_is_preserved() {
    let parse_error = "abc".parse::<f64>().unwrap_err();
    let error = AppError::invalid_format("bad reading").with_source(parse_error);
    assert!(std::error::Error::source(&error).is_some());
}
