//! # Bobby Common
//!
//! Shared types, utilities, and common functionality for Bobby Bot.
//!
//! This crate provides the foundational types, the application-wide error
//! type and the logging bootstrap used across all other crates in the
//! workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{BobbyError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig, LoggingGuard};
pub use types::*;
