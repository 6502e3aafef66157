//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// A transition delay is out of range.
    #[error("invalid {name} transition delay: {reason}")]
    InvalidTransition {
        /// Which delay is invalid (`enter` or `exit`).
        name: &'static str,
        /// The reason the delay is invalid.
        reason: String,
    },

    /// The log level is not a valid filter directive.
    #[error("invalid log level {level:?}: {source}")]
    InvalidLogLevel {
        /// The rejected directive string.
        level: String,
        /// Why the filter did not parse.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
