// ABOUTME: Main library entry point for Pierre training metrics
// ABOUTME: Workout records, sensor package dispatch and training summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Training Metrics
//!
//! Derives distance, mean speed and calories burned from raw sensor packages
//! for running, sports walking and swimming sessions, and renders a one-line
//! training report per session.
//!
//! ## Architecture
//!
//! - **Models**: immutable workout records sharing the `Training` formulas
//! - **Packages**: tag-based dispatch from sensor readings to records, batch processing
//! - **Formatters**: text template and JSON rendering of summaries
//! - **Config**: environment-driven presentation settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_training_metrics::errors::AppResult;
//! use pierre_training_metrics::formatters::Locale;
//! use pierre_training_metrics::packages::read_package;
//!
//! fn main() -> AppResult<()> {
//!     let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
//!     println!("{}", workout.summary().message(Locale::En));
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Unit conversions and per-discipline physical constants
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Summary rendering (text template, JSON)
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Workout records and types
pub mod models;

/// Sensor package dispatch and batch processing
pub mod packages;
