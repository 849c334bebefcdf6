// ABOUTME: Configuration management for summary presentation settings
// ABOUTME: Environment-only configuration (locale, output format); physical constants are never configurable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: summary locale and output format from environment variables

/// Environment-based summary configuration
pub mod environment;

pub use environment::SummaryConfig;
