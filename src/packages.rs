// ABOUTME: Sensor package dispatch: workout tag plus positional parameters to a workout record
// ABOUTME: Static tag-to-constructor table and batch processing that isolates per-package failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sensor Packages
//!
//! A sensor package is a workout type tag (`SWM`, `RUN`, `WLK`) and an ordered
//! list of numeric readings:
//!
//! | Tag   | Parameters                                                              |
//! |-------|-------------------------------------------------------------------------|
//! | `RUN` | `action_count, duration_hours, weight_kg`                               |
//! | `WLK` | `action_count, duration_hours, weight_kg, height_cm`                    |
//! | `SWM` | `action_count, duration_hours, weight_kg, pool_length_m, pool_lap_count` |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::errors::{AppError, AppResult};
use crate::formatters::TrainingSummary;
use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutType};

/// Builds a workout from parameters whose count was already checked
type WorkoutConstructor = fn(&[f64]) -> AppResult<Workout>;

static CONSTRUCTORS: OnceLock<HashMap<&'static str, (WorkoutType, WorkoutConstructor)>> =
    OnceLock::new();

fn constructors() -> &'static HashMap<&'static str, (WorkoutType, WorkoutConstructor)> {
    CONSTRUCTORS.get_or_init(|| {
        let mut table: HashMap<&'static str, (WorkoutType, WorkoutConstructor)> = HashMap::new();
        table.insert(
            WorkoutType::Swimming.code(),
            (WorkoutType::Swimming, build_swimming),
        );
        table.insert(
            WorkoutType::Running.code(),
            (WorkoutType::Running, build_running),
        );
        table.insert(
            WorkoutType::SportsWalking.code(),
            (WorkoutType::SportsWalking, build_sports_walking),
        );
        table
    })
}

/// Exclusive upper bound for a `u64` count (2^64, exactly representable)
const U64_COUNT_LIMIT: f64 = u64::MAX as f64;

/// Exclusive upper bound for a `u32` count (2^32)
const U32_COUNT_LIMIT: f64 = 4_294_967_296.0;

/// Convert a reading that must hold a whole, non-negative count below `limit`
fn whole_count(name: &str, value: f64, limit: f64) -> AppResult<f64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= limit {
        return Err(AppError::invalid_input(format!(
            "{name} must be a non-negative integer below {limit}, got {value}"
        )));
    }
    Ok(value)
}

fn build_running(data: &[f64]) -> AppResult<Workout> {
    let action_count = whole_count("action_count", data[0], U64_COUNT_LIMIT)? as u64;
    Ok(Running::new(action_count, data[1], data[2])?.into())
}

fn build_sports_walking(data: &[f64]) -> AppResult<Workout> {
    let action_count = whole_count("action_count", data[0], U64_COUNT_LIMIT)? as u64;
    Ok(SportsWalking::new(action_count, data[1], data[2], data[3])?.into())
}

fn build_swimming(data: &[f64]) -> AppResult<Workout> {
    let action_count = whole_count("action_count", data[0], U64_COUNT_LIMIT)? as u64;
    let pool_lap_count = whole_count("pool_lap_count", data[4], U32_COUNT_LIMIT)? as u32;
    Ok(Swimming::new(action_count, data[1], data[2], data[3], pool_lap_count)?.into())
}

/// Build a workout record from a tag and positional readings
///
/// # Errors
///
/// - `UnknownWorkoutType` if `workout_type` is not `SWM`, `RUN` or `WLK`
/// - `InvalidInput` if the parameter count does not match the workout, or a
///   count parameter is not a whole non-negative number
/// - `DomainError` if a duration, weight, height or pool parameter is not positive
pub fn read_package(workout_type: &str, data: &[f64]) -> AppResult<Workout> {
    let (kind, construct) = constructors()
        .get(workout_type)
        .ok_or_else(|| AppError::unknown_workout_type(workout_type))?;

    if data.len() != kind.parameter_count() {
        return Err(AppError::invalid_input(format!(
            "{workout_type} expects {} parameters [{}], got {}",
            kind.parameter_count(),
            kind.parameter_names().join(", "),
            data.len()
        )));
    }

    let workout = construct(data)?;
    debug!(workout_type = %kind, params = ?data, "Workout record constructed");
    Ok(workout)
}

/// One sensor reading batch entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout type tag (`SWM`, `RUN`, `WLK`)
    pub workout_type: String,
    /// Positional readings
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a package from a tag and readings
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Build the workout record this package describes
    ///
    /// # Errors
    ///
    /// See [`read_package`].
    pub fn read(&self) -> AppResult<Workout> {
        read_package(&self.workout_type, &self.data)
    }
}

impl fmt::Display for SensorPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.workout_type)?;
        for (index, value) in self.data.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Parses `TAG:v1,v2,...`, e.g. `RUN:15000,1,75`
impl FromStr for SensorPackage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, values) = s.split_once(':').ok_or_else(|| {
            AppError::invalid_format(format!(
                "Sensor package '{s}' must look like TAG:v1,v2,... (e.g. RUN:15000,1,75)"
            ))
        })?;

        let tag = tag.trim();
        if tag.is_empty() {
            return Err(AppError::invalid_format(format!(
                "Sensor package '{s}' has an empty workout type"
            )));
        }

        if values.trim().is_empty() {
            return Ok(Self::new(tag, Vec::new()));
        }

        let data = values
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(index, value)| {
                if value.is_empty() {
                    return Err(AppError::invalid_format(format!(
                        "Sensor package '{s}' has an empty reading at position {}",
                        index + 1
                    )));
                }
                value.parse::<f64>().map_err(|e| {
                    AppError::invalid_format(format!(
                        "Sensor package '{s}' has a non-numeric reading '{value}'"
                    ))
                    .with_source(e)
                })
            })
            .collect::<AppResult<Vec<f64>>>()?;

        Ok(Self::new(tag, data))
    }
}

/// The demo batch reported by the sensors
#[must_use]
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Result of processing one package of a batch
#[derive(Debug)]
pub struct PackageOutcome {
    /// Tag of the processed package
    pub workout_type: String,
    /// Summary, or the reason no summary was produced
    pub result: AppResult<TrainingSummary>,
}

impl PackageOutcome {
    /// Whether the package produced a summary
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Summarize every package of a batch, preserving input order
///
/// A failing package is reported in its own outcome and never stops the
/// remaining packages from being processed.
#[must_use]
pub fn process_batch(packages: &[SensorPackage]) -> Vec<PackageOutcome> {
    let outcomes: Vec<PackageOutcome> = packages
        .iter()
        .map(|package| {
            let result = package.read().map(|workout| workout.summary());
            if let Err(ref error) = result {
                warn!(
                    workout_type = %package.workout_type,
                    error.code = %error.code,
                    error.message = %error.message,
                    "Sensor package rejected"
                );
            }
            PackageOutcome {
                workout_type: package.workout_type.clone(),
                result,
            }
        })
        .collect();

    let failed = outcomes.iter().filter(|outcome| !outcome.is_ok()).count();
    info!(
        batch.size = packages.len(),
        batch.failed = failed,
        "Sensor batch processed"
    );
    outcomes
}
