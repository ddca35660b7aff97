//! # Bobby Commands
//!
//! Command dispatch and per-user cooldowns for Bobby Bot.
//!
//! The [`Dispatcher`] owns an ordered [`CommandRegistry`] and a
//! [`CooldownRegistry`]. It knows nothing about Discord: the gateway glue
//! resolves each message into an [`Invocation`] and sends back the returned
//! [`Reply`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod admin;
pub mod cooldown;
pub mod dispatcher;
pub mod quotes;
pub mod registry;
pub mod reply;
pub mod user;

pub use cooldown::{CooldownError, CooldownRegistry, Lockout};
pub use dispatcher::{Dispatch, Dispatcher, HandlerContext, Invocation, Outcome};
pub use registry::{CommandDescriptor, CommandRegistry, Handler};
pub use reply::{Embed, EmbedField, Reply, ReplyBody, ReplyTarget};
