//! Default values for every configuration section.

use crate::schema::*;
use bobby_common::LoggingConfig;
use std::collections::BTreeMap;

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "$";

/// Cooldown of the `access` command, in seconds.
pub const DEFAULT_ACCESS_COOLDOWN_SECS: u64 = 120;

/// Longest accepted cooldown, in seconds (one year).
pub const MAX_COOLDOWN_SECS: u64 = 365 * 24 * 60 * 60;

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            commands: CommandsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            guild: None,
            admin_ids: Vec::new(),
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        let mut cooldowns = BTreeMap::new();
        cooldowns.insert("access".to_string(), DEFAULT_ACCESS_COOLDOWN_SECS);

        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            cooldowns,
        }
    }
}
