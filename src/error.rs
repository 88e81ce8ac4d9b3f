use std::num::ParseIntError;

use thiserror::Error;

/// Unified error type for version parsing and configuration
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Not a version: '{0}'")]
    NoMatch(String),

    #[error("Version component {field} out of range: '{digits}'")]
    Overflow {
        field: &'static str,
        digits: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in installer-version
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a no-match error for the given input
    pub fn no_match(input: impl Into<String>) -> Self {
        VersionError::NoMatch(input.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }

    /// Create an overflow error for a numeric component
    pub fn overflow(field: &'static str, digits: impl Into<String>, source: ParseIntError) -> Self {
        VersionError::Overflow {
            field,
            digits: digits.into(),
            source,
        }
    }
}
