//! Application-wide error types using thiserror.

use bobby_common::BobbyError;
use poise::serenity_prelude as serenity;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration or logging error.
    #[error("Startup error: {0}")]
    Startup(#[from] BobbyError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

impl From<bobby_config::ConfigError> for BotError {
    fn from(err: bobby_config::ConfigError) -> Self {
        Self::Startup(err.into())
    }
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
