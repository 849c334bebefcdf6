// ABOUTME: Core data models for workout sessions reported by fitness sensors
// ABOUTME: Re-exports WorkoutType, the Training trait and the per-discipline records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `WorkoutType`: the closed set of disciplines and their sensor tag codes
//! - `Training`: shared metric formulas every discipline inherits or overrides
//! - `Running`, `SportsWalking`, `Swimming`: immutable session records
//! - `Workout`: any of the above, for dispatch

mod workout;
mod workout_type;

pub use workout::{Running, SessionBase, SportsWalking, Swimming, Training, Workout};
pub use workout_type::WorkoutType;
