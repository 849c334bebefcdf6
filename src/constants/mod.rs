// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, per-discipline physical constants and environment keys

//! Constants module
//!
//! Constants are grouped by domain: unit conversions shared by every formula,
//! the fixed physical constants of each workout discipline, and the names of
//! the environment variables the binaries read.

/// Unit conversion constants (distance, time, height)
pub mod units;

/// Fixed physical constants per workout discipline
pub mod workouts;

/// Environment variable names
pub mod env_config {
    /// Locale used to render summaries (`en`, `ru`)
    pub const SUMMARY_LOCALE: &str = "TRAINING_SUMMARY_LOCALE";

    /// Output format for summaries (`text`, `json`)
    pub const SUMMARY_FORMAT: &str = "TRAINING_SUMMARY_FORMAT";

    /// Log level directive
    pub const RUST_LOG: &str = "RUST_LOG";

    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";

    /// Include source file and line numbers in log records
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";

    /// Service name override for structured logging
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}

/// Service names for structured logging
pub mod service_names {
    /// Training metrics service
    pub const PIERRE_TRAINING_METRICS: &str = "pierre-training-metrics";
}
