//! Test utilities and shared test helpers for Bobby Bot.

use crate::types::UserId;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Discord-related test fixtures.
pub mod discord_fixtures {
    use super::UserId;

    /// A regular guild member.
    pub const fn test_user_id() -> UserId {
        UserId(123_456_789_012_345_678)
    }

    /// A second, unrelated guild member.
    pub const fn other_user_id() -> UserId {
        UserId(876_543_210_987_654_321)
    }

    /// A member that tests treat as a guild administrator.
    pub const fn admin_user_id() -> UserId {
        UserId(111_111_111_111_111_111)
    }
}
