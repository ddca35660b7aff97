//! Integration tests for bobby-common crate.

use bobby_common::{LogFormat, LoggingConfig, UserId};
use proptest::prelude::*;

#[test]
fn test_user_id_display() {
    let user_id = UserId(987_654_321);
    assert_eq!(format!("{user_id}"), "987654321");
    assert_eq!(user_id.get(), 987_654_321);
}

#[test]
fn test_user_id_ordering_follows_snowflake() {
    assert!(UserId(1) < UserId(2));
    assert_eq!(UserId::from(42), UserId(42));
}

#[test]
fn test_logging_config_from_partial_yaml() {
    let yaml = "level: debug\nformat: json\n";
    let config: LoggingConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.file.is_none());
    assert!(config.include_targets);
}

#[test]
fn test_log_format_rejects_unknown_value() {
    let result: Result<LoggingConfig, _> = serde_yaml::from_str("format: fancy\n");
    assert!(result.is_err());
}

proptest! {
    #[test]
    fn test_user_id_serializes_as_bare_number(id in any::<u64>()) {
        let json = serde_json::to_string(&UserId(id)).unwrap();
        prop_assert_eq!(json, id.to_string());
    }
}
