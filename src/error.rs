//! Error handling for the Agent Assistant runner.
//!
//! This module defines the error types for the host-process bootstrap using
//! the `thiserror` crate. The main error type is [`RunnerError`], which
//! wraps the more specific [`ConfigError`].
//!
//! The four bootstrap operations themselves (environment setup, log filter
//! installation, signal handler installation, run loop entry) are infallible
//! from `main`'s viewpoint; these types exist for the ambient configuration
//! and logging layers.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the runner.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Errors related to configuration loading, parsing, or validation.
    /// Wraps a [`ConfigError`].
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur during the initialization of the logging system.
    /// Contains a descriptive message of the failure.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),

    /// General I/O errors not covered by other specific variants.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`RunnerError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    /// Includes the path to the file and the source I/O error.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error occurred while parsing a configuration file (invalid TOML).
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// An error occurred due to invalid configuration values after
    /// successful parsing. Contains a descriptive message.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. XDG config home) could not be
    /// determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}
