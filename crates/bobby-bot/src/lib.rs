//! # Bobby Bot
//!
//! Discord bot serving Bobby quotes and one time access tokens, with
//! per-user command cooldowns.
//!
//! This is the main binary crate that wires the dispatcher from
//! `bobby-commands` to the Discord gateway using the Poise framework.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod cli;
pub mod error;
pub mod framework;
pub mod render;

pub use bot::*;
pub use cli::Args;
pub use error::*;
