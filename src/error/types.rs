//! Error types for the console logger.

use thiserror::Error;

/// Main error type for the logger.
///
/// Only construction, settings loading and lifecycle calls can fail.
/// Emission methods never return errors.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// Configuration-related errors.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The configured level name is not a known severity.
    #[error("Unknown log level '{name}'. Valid levels: DEBUG, INFO, WARN, ERROR, ACCESS, ACTION, NONE")]
    UnknownLevel { name: String },
}

impl LoggerError {
    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for logger operations.
pub type LoggerResult<T> = Result<T, LoggerError>;
