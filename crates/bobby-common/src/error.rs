//! Error types and utilities for Bobby Bot.

use thiserror::Error;

/// Result type alias for Bobby Bot operations.
pub type Result<T> = std::result::Result<T, BobbyError>;

/// Main error type for infrastructure failures.
///
/// User-facing rejections (cooldowns, missing permissions, private channels)
/// are replies, not errors, and never show up here.
#[derive(Error, Debug)]
pub enum BobbyError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Discord API related errors
    #[error("Discord API error: {message}")]
    Discord {
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Logging bootstrap errors
    #[error("Logging error: {message}")]
    Logging {
        /// Human readable description.
        message: String,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BobbyError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Discord API error
    pub fn discord(msg: impl Into<String>) -> Self {
        Self::Discord {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new Discord API error with source
    pub fn discord_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Discord {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_config_error_display() {
        let err = BobbyError::config("token missing");
        assert_eq!(err.to_string(), "Configuration error: token missing");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_with_source_keeps_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.yaml");
        let err = BobbyError::config_with_source("could not read file", io);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BobbyError = io.into();
        assert!(matches!(err, BobbyError::Io(_)));
    }
}
