// ABOUTME: Unified error handling for workout construction, dispatch and formatting
// ABOUTME: Defines ErrorCode, AppError, AppResult and the serializable ErrorResponse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure the crate can report carries an [`ErrorCode`] and a
//! human-readable message. Failures are deterministic: the same package fails
//! the same way on every attempt, so nothing here is retryable.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Wrong parameter count or parameter type for the selected workout
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Textual input could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A physical constraint is violated (non-positive duration, height, ...)
    #[serde(rename = "DOMAIN_ERROR")]
    DomainError = 3003,

    // Dispatch (4000-4999)
    /// Workout type tag is not one of the recognized codes
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType = 4000,

    // Configuration (6000-6999)
    /// Environment configuration holds an unsupported value
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Serialization (9000-9999)
    /// Data serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Stable string form of the code, matching its serialized name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::DomainError => "DOMAIN_ERROR",
            Self::UnknownWorkoutType => "UNKNOWN_WORKOUT_TYPE",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::SerializationError => "SERIALIZATION_ERROR",
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided sensor parameters are invalid",
            Self::InvalidFormat => "The sensor package text is malformed",
            Self::DomainError => "A workout parameter is outside its physical domain",
            Self::UnknownWorkoutType => "The workout type is not recognized",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the crate
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Wrong arity or parameter type
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed textual input
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Physical constraint violation
    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DomainError, message)
    }

    /// Unrecognized workout type tag
    pub fn unknown_workout_type(tag: &str) -> Self {
        Self::new(
            ErrorCode::UnknownWorkoutType,
            format!("Unknown workout type '{tag}'. Valid options: SWM, RUN, WLK"),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Error line emitted in JSON output mode
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Workout type tag of the failed package
    pub workout_type: String,
}

impl ErrorResponse {
    /// Attach the workout tag of the package that failed
    #[must_use]
    pub fn for_package(error: &AppError, workout_type: &str) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
                workout_type: workout_type.to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings_match_serde() {
        for code in [
            ErrorCode::InvalidInput,
            ErrorCode::DomainError,
            ErrorCode::UnknownWorkoutType,
            ErrorCode::ConfigInvalid,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::domain("duration_hours must be positive, got 0");
        let text = error.to_string();
        assert!(text.starts_with(ErrorCode::DomainError.description()));
        assert!(text.ends_with("duration_hours must be positive, got 0"));
    }
}
