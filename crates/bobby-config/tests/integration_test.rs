//! Integration tests for bobby-config crate.

use bobby_common::LogFormat;
use bobby_config::{
    Config, ConfigError, ConfigLoader, DEFAULT_ACCESS_COOLDOWN_SECS, MAX_COOLDOWN_SECS,
};
use proptest::prelude::*;
use std::io::Write;
use std::time::Duration;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();

    // Default config should fail validation due to the empty token
    assert!(config.validate().is_err());

    config.discord.token = "test_token".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_access_cooldown() {
    let config = Config::default();
    assert_eq!(config.commands.prefix, "$");
    assert_eq!(
        config.commands.cooldown("access"),
        Some(Duration::from_secs(DEFAULT_ACCESS_COOLDOWN_SECS))
    );
    assert_eq!(config.commands.cooldown("bobby"), None);
}

#[test]
fn test_load_config_from_file() {
    let file = write_config(
        r#"
discord:
  token: "file.token.value"
  guild: "Strickland Propane"
  admin_ids: [42]
commands:
  prefix: "!"
  cooldowns:
    access: 30
    bobby: 5
logging:
  level: debug
  format: compact
"#,
    );

    let config = ConfigLoader::load_config(file.path()).unwrap();

    assert_eq!(config.discord.admin_ids, vec![42]);
    assert_eq!(config.commands.cooldown("access"), Some(Duration::from_secs(30)));
    assert_eq!(config.commands.cooldown("bobby"), Some(Duration::from_secs(5)));
    assert_eq!(config.logging.format, LogFormat::Compact);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = ConfigLoader::parse("discord:\n  token: \"x\"\n").unwrap();
    assert_eq!(config.commands, Config::default().commands);
    assert_eq!(config.logging, Config::default().logging);
}

#[test]
fn test_zero_cooldown_is_rejected() {
    let mut config = ConfigLoader::parse("commands:\n  cooldowns:\n    access: 0\n").unwrap();
    config.discord.token = "token".to_string();

    match config.validate().unwrap_err() {
        ConfigError::Validation { field, .. } => assert_eq!(field, "commands.cooldowns.access"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_oversized_cooldown_is_rejected() {
    let mut config =
        ConfigLoader::parse("commands:\n  cooldowns:\n    access: 18446744073709551615\n").unwrap();
    config.discord.token = "token".to_string();

    match config.validate().unwrap_err() {
        ConfigError::Validation { field, .. } => assert_eq!(field, "commands.cooldowns.access"),
        other => panic!("unexpected error: {other}"),
    }

    config
        .commands
        .cooldowns
        .insert("access".to_string(), MAX_COOLDOWN_SECS);
    assert!(config.validate().is_ok());
}

#[test]
fn test_whitespace_prefix_is_rejected() {
    let mut config = Config::default();
    config.discord.token = "token".to_string();
    config.commands.prefix = "b ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ConfigLoader::load_config("/definitely/not/here/config.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let err = ConfigLoader::parse("commands: [not, a, map").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_token_is_redacted_in_debug_output() {
    let mut config = Config::default();
    config.discord.token = "super.secret.token".to_string();
    let debug = format!("{config:?}");
    assert!(!debug.contains("super.secret.token"));
    assert!(debug.contains("<redacted>"));
}

proptest! {
    #[test]
    fn test_any_positive_cooldown_validates(secs in 1u64..=86_400) {
        let mut config = Config::default();
        config.discord.token = "token".to_string();
        config.commands.cooldowns.insert("access".to_string(), secs);
        prop_assert!(config.validate().is_ok());
        prop_assert_eq!(config.commands.cooldown("access"), Some(Duration::from_secs(secs)));
    }
}
