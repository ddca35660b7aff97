//! Configuration loading with environment variable overrides.

use crate::schema::Config;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "BOBBY_CONFIG_PATH";

/// Files probed in the working directory when no path is given.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["config.yaml", "config.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Offending variable.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Invalid value for '{field}': {message}")]
    Validation {
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },
}

impl ConfigError {
    /// Create a validation error for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ConfigError> for bobby_common::BobbyError {
    fn from(err: ConfigError) -> Self {
        bobby_common::BobbyError::config_with_source("could not load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from an explicit path, `BOBBY_CONFIG_PATH`, or the
    /// default file names, falling back to defaults plus environment.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_config(path);
        }

        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Self::load_config(path);
        }

        if let Some(path) = DEFAULT_CONFIG_FILES
            .iter()
            .map(Path::new)
            .find(|p| p.exists())
        {
            return Self::load_config(path);
        }

        debug!("No configuration file found, using defaults and environment");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse YAML without applying overrides or validating.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply process environment overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup`.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            config.discord.token = token;
        }

        if let Some(guild) = lookup("DISCORD_GUILD") {
            config.discord.guild = Some(guild).filter(|g| !g.is_empty());
        }

        if let Some(prefix) = lookup("BOBBY_PREFIX") {
            config.commands.prefix = prefix;
        }

        if let Some(ids) = lookup("BOBBY_ADMIN_IDS") {
            config.discord.admin_ids = ids
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<u64>().map_err(|e| ConfigError::EnvParse {
                        var: "BOBBY_ADMIN_IDS".to_string(),
                        source: Box::new(e),
                    })
                })
                .collect::<Result<_, _>>()?;
        }

        if let Some(level) = lookup("BOBBY_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = Config::default();
        ConfigLoader::apply_overrides(
            &mut config,
            lookup_from(&[
                ("DISCORD_TOKEN", "abc.def.ghi"),
                ("DISCORD_GUILD", "Arlen"),
                ("BOBBY_PREFIX", "!"),
                ("BOBBY_ADMIN_IDS", "1, 2,,3"),
                ("BOBBY_LOG_LEVEL", "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.discord.token, "abc.def.ghi");
        assert_eq!(config.discord.guild.as_deref(), Some("Arlen"));
        assert_eq!(config.commands.prefix, "!");
        assert_eq!(config.discord.admin_ids, vec![1, 2, 3]);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_overrides_leave_config_untouched() {
        let mut config = Config::default();
        ConfigLoader::apply_overrides(&mut config, |_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_admin_id_reports_variable() {
        let mut config = Config::default();
        let err = ConfigLoader::apply_overrides(
            &mut config,
            lookup_from(&[("BOBBY_ADMIN_IDS", "12,hank")]),
        )
        .unwrap_err();

        match err {
            ConfigError::EnvParse { var, .. } => assert_eq!(var, "BOBBY_ADMIN_IDS"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
