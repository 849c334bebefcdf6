// ABOUTME: Integration tests for sensor package dispatch and batch processing
// ABOUTME: Covers tag lookup, arity and type validation, text parsing and batch isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used)]

mod common;

use common::{assert_close, FORMULA_EPSILON};
use pierre_training_metrics::errors::ErrorCode;
use pierre_training_metrics::formatters::Locale;
use pierre_training_metrics::models::WorkoutType;
use pierre_training_metrics::packages::{
    default_packages, process_batch, read_package, SensorPackage,
};

#[test]
fn test_run_scenario() {
    let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(workout.workout_type(), WorkoutType::Running);
    assert_close(workout.distance_km(), 9.75, FORMULA_EPSILON);
    assert_close(workout.mean_speed_kmh(), 9.75, FORMULA_EPSILON);
    assert_close(
        workout.spent_calories(),
        (18.0 * 9.75 + 1.79) * 75.0 / 1000.0 * 60.0,
        FORMULA_EPSILON,
    );
    assert_eq!(workout.summary().label(Locale::En), "Running");
}

#[test]
fn test_walk_scenario() {
    let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(workout.workout_type(), WorkoutType::SportsWalking);
    assert_close(workout.distance_km(), 5.85, FORMULA_EPSILON);
    assert_close(workout.mean_speed_kmh(), 5.85, FORMULA_EPSILON);
    assert_close(workout.spent_calories(), 348.945_312_5, FORMULA_EPSILON);
}

#[test]
fn test_swim_scenario() {
    let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(workout.workout_type(), WorkoutType::Swimming);
    assert_close(workout.mean_speed_kmh(), 1.0, FORMULA_EPSILON);
    assert_close(workout.spent_calories(), 336.0, FORMULA_EPSILON);
}

#[test]
fn test_unknown_tag_rejected() {
    let err = read_package("XYZ", &[15000.0, 1.0, 75.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownWorkoutType);
    assert!(err.message.contains("XYZ"));
}

#[test]
fn test_tags_are_case_sensitive() {
    let err = read_package("run", &[15000.0, 1.0, 75.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownWorkoutType);
}

#[test]
fn test_wrong_arity_rejected() {
    let cases: [(&str, &[f64]); 4] = [
        ("RUN", &[15000.0, 1.0]),
        ("RUN", &[15000.0, 1.0, 75.0, 180.0]),
        ("WLK", &[9000.0, 1.0, 75.0]),
        ("SWM", &[720.0, 1.0, 80.0, 25.0]),
    ];
    for (tag, data) in cases {
        let err = read_package(tag, data).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "{tag} {data:?}");
    }
}

#[test]
fn test_fractional_counts_rejected() {
    let err = read_package("RUN", &[150.5, 1.0, 75.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = read_package("WLK", &[-1.0, 1.0, 75.0, 180.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_zero_duration_is_domain_error() {
    let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::DomainError);

    let err = read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::DomainError);
}

#[test]
fn test_non_finite_metrics_never_reach_a_summary() {
    let err = read_package("RUN", &[15000.0, 1e-310, 75.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::DomainError);

    let err = read_package("SWM", &[720.0, 1.0, 1e308, 25.0, 40.0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::DomainError);
}

#[test]
fn test_package_from_str() {
    let package: SensorPackage = "SWM:720, 1, 80, 25, 40".parse().unwrap();
    assert_eq!(package.workout_type, "SWM");
    assert_eq!(package.data, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
    assert!(package.read().is_ok());
}

#[test]
fn test_package_from_str_rejects_malformed_text() {
    for text in [
        "RUN 15000,1,75",
        ":15000,1,75",
        "RUN:15000,one,75",
        "RUN:15000,,1,75",
        "RUN:15000,,1,,75",
        "RUN:15000,1,75,",
    ] {
        let err = text.parse::<SensorPackage>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat, "{text}");
    }
}

#[test]
fn test_package_deserializes_from_json() {
    let package: SensorPackage =
        serde_json::from_str(r#"{"workout_type":"RUN","data":[15000,1,75]}"#).unwrap();
    assert_eq!(package, SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
}

#[test]
fn test_default_batch_order() {
    let outcomes = process_batch(&default_packages());
    let tags: Vec<&str> = outcomes.iter().map(|o| o.workout_type.as_str()).collect();
    assert_eq!(tags, ["SWM", "RUN", "WLK"]);
    assert!(outcomes.iter().all(|o| o.is_ok()));
}

#[test]
fn test_batch_continues_after_failure() {
    let packages = vec![
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("XYZ", vec![1.0, 2.0, 3.0]),
        SensorPackage::new("RUN", vec![15000.0, 0.0, 75.0]),
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
    ];

    let outcomes = process_batch(&packages);
    assert_eq!(outcomes.len(), 4);
    assert!(outcomes[0].is_ok());
    assert_eq!(
        outcomes[1].result.as_ref().unwrap_err().code,
        ErrorCode::UnknownWorkoutType
    );
    assert_eq!(
        outcomes[2].result.as_ref().unwrap_err().code,
        ErrorCode::DomainError
    );
    let swim = outcomes[3].result.as_ref().unwrap();
    assert_eq!(swim.workout_type, WorkoutType::Swimming);
}
