//! # Bobby Config
//!
//! Type-safe configuration management for Bobby Bot.
//!
//! This crate provides the YAML schema, its defaults, validation, and a
//! loader that layers environment variable overrides on top of the file.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
