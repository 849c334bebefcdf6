// ABOUTME: Workout records for running, sports walking and swimming sessions
// ABOUTME: Shared kinematic formulas in the Training trait, per-discipline calorie models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Records
//!
//! A workout record is an immutable snapshot of one completed session. All
//! metrics are pure functions of the record's fields and are recomputed on
//! every call.
//!
//! The [`Training`] trait carries the shared formulas (distance from action
//! count and step length, mean speed over the whole session, unit helpers).
//! Each discipline supplies its own calorie model; swimming also replaces the
//! mean speed formula with a pool-based one. [`Workout`] closes the set of
//! disciplines for dispatch.

use crate::constants::units::{CM_PER_METER, METERS_PER_KM, MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
use crate::constants::workouts::{running, swimming, walking};
use crate::errors::{AppError, AppResult};
use crate::formatters::summary::TrainingSummary;
use crate::models::WorkoutType;

/// Require a finite, strictly positive real parameter
fn positive(name: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    if value <= 0.0 {
        return Err(AppError::domain(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(value)
}

/// Reject records whose metrics overflow, e.g. a vanishing duration or a huge weight
fn finite_metrics<T: Training>(record: T) -> AppResult<T> {
    let speed = record.mean_speed_kmh();
    if !speed.is_finite() {
        return Err(AppError::domain(format!(
            "{} mean speed is not finite ({speed} km/h); duration_hours is too small",
            T::WORKOUT_TYPE.code()
        )));
    }
    let calories = record.spent_calories();
    if !calories.is_finite() {
        return Err(AppError::domain(format!(
            "{} calories are not finite ({calories} kcal); check weight and duration",
            T::WORKOUT_TYPE.code()
        )));
    }
    Ok(record)
}

/// Fields shared by every discipline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionBase {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
}

impl SessionBase {
    /// Validate and build the shared session fields
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if `duration_hours` or `weight_kg` is not strictly
    /// positive, and `InvalidInput` if either is NaN or infinite.
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> AppResult<Self> {
        Ok(Self {
            action_count,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }

    /// Steps or strokes recorded by the sensor
    #[must_use]
    pub const fn action_count(&self) -> u64 {
        self.action_count
    }

    /// Session length in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Athlete body weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Metrics contract shared by every workout discipline
pub trait Training {
    /// Discipline of the implementing record
    const WORKOUT_TYPE: WorkoutType;

    /// Distance covered per step or stroke, in meters
    const STEP_LENGTH_M: f64;

    /// Shared session fields
    fn base(&self) -> &SessionBase;

    /// Calories burned over the session (kcal); every discipline has its own model
    fn spent_calories(&self) -> f64;

    /// Distance in kilometers derived from the action count
    fn distance_km(&self) -> f64 {
        self.base().action_count() as f64 * Self::STEP_LENGTH_M / METERS_PER_KM
    }

    /// Mean speed over the whole session in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_hours()
    }

    /// Mean speed over the whole session in m/s
    fn mean_speed_m_s(&self) -> f64 {
        self.mean_speed_kmh() * METERS_PER_KM / (MINUTES_PER_HOUR * SECONDS_PER_MINUTE)
    }

    /// Session length in minutes
    fn duration_minutes(&self) -> f64 {
        self.base().duration_hours() * MINUTES_PER_HOUR
    }

    /// Snapshot every metric into a summary
    fn summary(&self) -> TrainingSummary {
        TrainingSummary::new(
            Self::WORKOUT_TYPE,
            self.base().duration_hours(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}

/// Running session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    base: SessionBase,
}

impl Running {
    /// Build a running record
    ///
    /// # Errors
    ///
    /// Returns `DomainError` for a non-positive duration or weight, or when
    /// speed or calories would not be finite.
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> AppResult<Self> {
        finite_metrics(Self {
            base: SessionBase::new(action_count, duration_hours, weight_kg)?,
        })
    }
}

impl Training for Running {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::Running;
    const STEP_LENGTH_M: f64 = running::STEP_LENGTH_M;

    fn base(&self) -> &SessionBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (running::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + running::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight_kg()
            / METERS_PER_KM
            * self.duration_minutes()
    }
}

/// Sports walking session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    base: SessionBase,
    height_cm: f64,
}

impl SportsWalking {
    /// Build a sports walking record
    ///
    /// # Errors
    ///
    /// Returns `DomainError` for a non-positive duration, weight or height, or
    /// when speed or calories would not be finite.
    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> AppResult<Self> {
        finite_metrics(Self {
            base: SessionBase::new(action_count, duration_hours, weight_kg)?,
            height_cm: positive("height_cm", height_cm)?,
        })
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::SportsWalking;
    const STEP_LENGTH_M: f64 = walking::STEP_LENGTH_M;

    fn base(&self) -> &SessionBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let weight_kg = self.base.weight_kg();
        (walking::CALORIES_WEIGHT_MULTIPLIER * weight_kg
            + (self.mean_speed_m_s().powi(2) / (self.height_cm / CM_PER_METER))
                * walking::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight_kg)
            * self.duration_minutes()
    }
}

/// Pool swimming session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    base: SessionBase,
    pool_length_m: f64,
    pool_lap_count: u32,
}

impl Swimming {
    /// Build a swimming record
    ///
    /// # Errors
    ///
    /// Returns `DomainError` for a non-positive duration, weight or pool length,
    /// a lap count of zero, or when speed or calories would not be finite.
    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: u32,
    ) -> AppResult<Self> {
        if pool_lap_count == 0 {
            return Err(AppError::domain("pool_lap_count must be positive, got 0"));
        }
        finite_metrics(Self {
            base: SessionBase::new(action_count, duration_hours, weight_kg)?,
            pool_length_m: positive("pool_length_m", pool_length_m)?,
            pool_lap_count,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn pool_lap_count(&self) -> u32 {
        self.pool_lap_count
    }
}

impl Training for Swimming {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::Swimming;
    const STEP_LENGTH_M: f64 = swimming::STEP_LENGTH_M;

    fn base(&self) -> &SessionBase {
        &self.base
    }

    // Pool-based: the stroke count does not enter the speed
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lap_count)
            / METERS_PER_KM
            / self.base.duration_hours()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + swimming::CALORIES_MEAN_SPEED_SHIFT)
            * swimming::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg()
            * self.base.duration_hours()
    }
}

/// Any supported workout record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    /// Running session
    Running(Running),
    /// Sports walking session
    SportsWalking(SportsWalking),
    /// Pool swimming session
    Swimming(Swimming),
}

impl Workout {
    /// Discipline of this record
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running(_) => WorkoutType::Running,
            Self::SportsWalking(_) => WorkoutType::SportsWalking,
            Self::Swimming(_) => WorkoutType::Swimming,
        }
    }

    /// Shared session fields
    #[must_use]
    pub fn base(&self) -> &SessionBase {
        match self {
            Self::Running(w) => w.base(),
            Self::SportsWalking(w) => w.base(),
            Self::Swimming(w) => w.base(),
        }
    }

    /// Distance in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Running(w) => w.distance_km(),
            Self::SportsWalking(w) => w.distance_km(),
            Self::Swimming(w) => w.distance_km(),
        }
    }

    /// Mean speed in km/h
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running(w) => w.mean_speed_kmh(),
            Self::SportsWalking(w) => w.mean_speed_kmh(),
            Self::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    /// Calories burned (kcal)
    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        match self {
            Self::Running(w) => w.spent_calories(),
            Self::SportsWalking(w) => w.spent_calories(),
            Self::Swimming(w) => w.spent_calories(),
        }
    }

    /// Snapshot every metric into a summary
    #[must_use]
    pub fn summary(&self) -> TrainingSummary {
        match self {
            Self::Running(w) => w.summary(),
            Self::SportsWalking(w) => w.summary(),
            Self::Swimming(w) => w.summary(),
        }
    }
}

impl From<Running> for Workout {
    fn from(workout: Running) -> Self {
        Self::Running(workout)
    }
}

impl From<SportsWalking> for Workout {
    fn from(workout: SportsWalking) -> Self {
        Self::SportsWalking(workout)
    }
}

impl From<Swimming> for Workout {
    fn from(workout: Swimming) -> Self {
        Self::Swimming(workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_helpers() {
        let run = Running::new(15000, 1.5, 75.0).unwrap();
        assert!((run.duration_minutes() - 90.0).abs() < f64::EPSILON);
        let expected_m_s = run.mean_speed_kmh() * 1000.0 / 3600.0;
        assert!((run.mean_speed_m_s() - expected_m_s).abs() < 1e-12);
    }

    #[test]
    fn test_zero_lap_count_rejected() {
        let err = Swimming::new(720, 1.0, 80.0, 25.0, 0).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::DomainError);
    }

    #[test]
    fn test_nan_weight_is_invalid_input() {
        let err = Running::new(100, 1.0, f64::NAN).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
    }

    #[test]
    fn test_enum_delegates_to_variant() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
        let workout = Workout::from(walk);
        assert_eq!(workout.workout_type(), WorkoutType::SportsWalking);
        assert!((workout.spent_calories() - walk.spent_calories()).abs() < f64::EPSILON);
        assert_eq!(workout.base().action_count(), 9000);
    }
}
