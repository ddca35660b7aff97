//! Configuration schema definitions using serde.

use crate::defaults::MAX_COOLDOWN_SECS;
use crate::loader::ConfigError;
use bobby_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Main configuration structure for Bobby Bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Command configuration.
    pub commands: CommandsConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Guild the bot is meant to serve. Informational only.
    pub guild: Option<String>,
    /// User IDs treated as administrators regardless of guild permissions.
    pub admin_ids: Vec<u64>,
}

// The token must never end up in a log line.
impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .field("guild", &self.guild)
            .field("admin_ids", &self.admin_ids)
            .finish()
    }
}

/// Command configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Prefix that introduces a command, e.g. `$` in `$help`.
    pub prefix: String,
    /// Per-command cooldowns in whole seconds, keyed by command name.
    pub cooldowns: BTreeMap<String, u64>,
}

impl CommandsConfig {
    /// Cooldown configured for `command`, if any.
    #[must_use]
    pub fn cooldown(&self, command: &str) -> Option<Duration> {
        self.cooldowns.get(command).copied().map(Duration::from_secs)
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discord.token.trim().is_empty() {
            return Err(ConfigError::validation(
                "discord.token",
                "Discord token cannot be empty",
            ));
        }

        self.commands.validate()
    }
}

impl CommandsConfig {
    /// Validates the command section on its own. The token is not needed
    /// here, which lets tests build dispatchers from a default config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() || self.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::validation(
                "commands.prefix",
                "prefix must be non-empty and contain no whitespace",
            ));
        }

        if let Some((command, _)) = self
            .cooldowns
            .iter()
            .find(|(_, secs)| !(1..=MAX_COOLDOWN_SECS).contains(*secs))
        {
            return Err(ConfigError::validation(
                format!("commands.cooldowns.{command}"),
                format!("cooldown must be between 1 and {MAX_COOLDOWN_SECS} seconds"),
            ));
        }

        Ok(())
    }
}
