// ABOUTME: Output format abstraction for rendering training summaries
// ABOUTME: Supports the fixed text template (default) and one JSON object per line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: the fixed one-line training report, localized
//! - **JSON**: rounded metrics as a single-line JSON object
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pierre_training_metrics::formatters::{format_summary, Locale, OutputFormat};
//! use pierre_training_metrics::packages::read_package;
//!
//! # fn example() -> pierre_training_metrics::errors::AppResult<()> {
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let line = format_summary(&workout.summary(), OutputFormat::Text, Locale::En)?;
//! println!("{line}");
//! # Ok(())
//! # }
//! ```

/// Training summary snapshot and text template
pub mod summary;

pub use summary::{format_message, round_metric, SummaryRecord, TrainingSummary};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed text template (default)
    #[default]
    Text,
    /// One JSON object per summary
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Unknown output format '{other}'. Valid options: text, json"
            ))),
        }
    }
}

/// Language of the training report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English labels and template (default)
    #[default]
    En,
    /// Russian labels and template
    Ru,
}

impl Locale {
    /// Get the locale code as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            other => Err(AppError::config(format!(
                "Unknown locale '{other}'. Valid options: en, ru"
            ))),
        }
    }
}

/// Render a summary in the requested format
///
/// # Errors
///
/// Returns `SerializationError` if JSON serialization fails.
pub fn format_summary(
    summary: &TrainingSummary,
    format: OutputFormat,
    locale: Locale,
) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(summary.message(locale)),
        OutputFormat::Json => Ok(serde_json::to_string(&summary.to_record(locale))?),
    }
}
