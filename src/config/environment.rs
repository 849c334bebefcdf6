// ABOUTME: Environment configuration for how training summaries are rendered
// ABOUTME: Parses TRAINING_SUMMARY_LOCALE and TRAINING_SUMMARY_FORMAT with typed validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for summary rendering

use std::env;
use tracing::{debug, info};

use crate::constants::env_config;
use crate::errors::{AppError, AppResult};
use crate::formatters::{Locale, OutputFormat};

/// Presentation settings for the summary printer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryConfig {
    /// Language of labels and template
    pub locale: Locale,
    /// Text template or JSON lines
    pub output_format: OutputFormat,
}

/// Read an optional variable; unset or empty means "use the default"
fn env_var_opt(key: &str) -> AppResult<Option<String>> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_owned())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e @ env::VarError::NotUnicode(_)) => {
            Err(AppError::config(format!("{key} is not valid unicode")).with_source(e))
        }
    }
}

impl SummaryConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable holds an unsupported value.
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(locale) = env_var_opt(env_config::SUMMARY_LOCALE)? {
            config.locale = locale.parse().map_err(|e: AppError| {
                AppError::config(format!("Invalid {}: {}", env_config::SUMMARY_LOCALE, e.message))
            })?;
        }

        if let Some(format) = env_var_opt(env_config::SUMMARY_FORMAT)? {
            config.output_format = format.parse().map_err(|e: AppError| {
                AppError::config(format!("Invalid {}: {}", env_config::SUMMARY_FORMAT, e.message))
            })?;
        }

        debug!(
            locale = %config.locale,
            output_format = %config.output_format,
            "Summary configuration loaded"
        );
        Ok(config)
    }

    /// Apply command-line overrides on top of the environment values
    #[must_use]
    pub fn with_overrides(self, locale: Option<Locale>, output_format: Option<OutputFormat>) -> Self {
        let merged = Self {
            locale: locale.unwrap_or(self.locale),
            output_format: output_format.unwrap_or(self.output_format),
        };
        if merged != self {
            info!(
                locale = %merged.locale,
                output_format = %merged.output_format,
                "Command-line overrides applied to summary configuration"
            );
        }
        merged
    }
}
