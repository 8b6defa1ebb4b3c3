//! Core error types for cadence-core.
//!
//! This module defines the error hierarchy using thiserror. Codec errors
//! are caught at the edit/decode boundary and surfaced as a correction
//! prompt; API errors leave registry state untouched and are retryable.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cadence-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Recurrence codec errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Automations API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from the recurrence codec and time-slot parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Cron input outside the supported positional grammar (ranges, lists,
    /// step values, wrong field count). Rejected rather than guessed at.
    #[error("unsupported schedule format: {cron:?}")]
    UnsupportedFormat { cron: String },

    /// A value that parses but is out of range, or a time token absent
    /// from the selectable catalog.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Errors from the automations HTTP API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request failed before a response arrived
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("failed to decode server response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base URL or joined endpoint path is not a valid URL
    #[error("invalid server URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
