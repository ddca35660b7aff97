//! Guard-then-execute dispatch of command invocations.
//!
//! Guards run in a fixed order and the first rejection wins:
//! private channel, then cooldown, then administrator.

use crate::cooldown::CooldownRegistry;
use crate::registry::{CommandDescriptor, CommandRegistry};
use crate::reply::Reply;
use bobby_common::UserId;
use bobby_config::CommandsConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// One command invocation as resolved by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Command name without prefix.
    pub command: String,
    /// Invoking member.
    pub member: UserId,
    /// Sent from a direct message channel.
    pub is_private: bool,
    /// The platform reports the member as an administrator.
    pub is_admin: bool,
    /// Gateway heartbeat latency, when known.
    pub latency: Option<Duration>,
}

impl Invocation {
    /// A guild, non-admin invocation.
    pub fn new(command: impl Into<String>, member: UserId) -> Self {
        Self {
            command: command.into(),
            member,
            is_private: false,
            is_admin: false,
            latency: None,
        }
    }

    /// Set whether the invocation came from a private channel.
    #[must_use]
    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    /// Set whether the member is an administrator.
    #[must_use]
    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Attach the gateway latency.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every guard passed and the handler ran.
    Executed,
    /// Guild-only command sent from a private channel.
    Rejected,
    /// The member is still locked out of the command.
    RateLimited {
        /// Whole seconds left on the lockout.
        remaining: Duration,
    },
    /// Admin-only command invoked by a non-admin.
    Denied,
    /// The cooldown could not be recorded, so the command was not run.
    Unavailable,
}

/// Result of dispatching an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Which state the invocation ended in.
    pub outcome: Outcome,
    /// What to send back.
    pub reply: Reply,
}

/// Everything a handler may use.
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    /// The invocation being handled.
    pub invocation: &'a Invocation,
    /// All registered commands, for `help`.
    pub commands: &'a CommandRegistry,
    /// Configured command prefix.
    pub prefix: &'a str,
    /// Cancelled to ask the bot to log out.
    pub shutdown: &'a CancellationToken,
}

/// Routes invocations to handlers.
#[derive(Debug)]
pub struct Dispatcher {
    commands: CommandRegistry,
    cooldowns: Arc<CooldownRegistry>,
    prefix: String,
    shutdown: CancellationToken,
}

impl Dispatcher {
    /// Build a dispatcher over an explicit command set and registry.
    pub fn new(
        commands: CommandRegistry,
        cooldowns: Arc<CooldownRegistry>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            commands,
            cooldowns,
            prefix: prefix.into(),
            shutdown: CancellationToken::new(),
        }
    }

    /// Built-in commands with cooldowns and prefix taken from `config`.
    pub fn from_config(config: &CommandsConfig) -> Self {
        Self::new(
            CommandRegistry::builtin(config),
            Arc::new(CooldownRegistry::new()),
            config.prefix.clone(),
        )
    }

    /// Run the guards for `invocation` and, if they pass, its handler.
    ///
    /// Returns `None` for names that are not registered. Must be called from
    /// within a Tokio runtime, registering a cooldown spawns its timer.
    pub fn dispatch(&self, invocation: &Invocation) -> Option<Dispatch> {
        let Some(command) = self.commands.get(&invocation.command) else {
            debug!("Ignoring unknown command '{}'", invocation.command);
            return None;
        };

        Some(self.run(command, invocation))
    }

    fn run(&self, command: &CommandDescriptor, invocation: &Invocation) -> Dispatch {
        let member = invocation.member;

        if command.guild_only && invocation.is_private {
            debug!("Rejected '{}' from user {} in a private channel", command.name, member);
            return Dispatch {
                outcome: Outcome::Rejected,
                reply: Reply::direct(format!(
                    "Command: {}{} failed. Please do not send this command in a private message.",
                    self.prefix, command.name
                )),
            };
        }

        if let Some(cooldown) = command.cooldown {
            if self.cooldowns.is_locked_out(command.name, member) {
                // The floored value reads zero during the final second.
                let remaining = self
                    .cooldowns
                    .remaining(command.name, member)
                    .max(Duration::from_secs(1));
                debug!(
                    "User {} is on cooldown for '{}' ({}s left)",
                    member,
                    command.name,
                    remaining.as_secs()
                );
                return Dispatch {
                    outcome: Outcome::RateLimited { remaining },
                    reply: Reply::direct(format!(
                        "Command on cooldown. Please wait {} seconds to use this command again.",
                        remaining.as_secs()
                    )),
                };
            }

            if let Err(e) = self.cooldowns.register(command.name, member, cooldown) {
                error!("Refusing '{}' for user {}: {}", command.name, member, e);
                return Dispatch {
                    outcome: Outcome::Unavailable,
                    reply: Reply::direct(format!(
                        "Command: {}{} is unavailable right now.",
                        self.prefix, command.name
                    )),
                };
            }
        }

        if command.admin_only && !invocation.is_admin {
            warn!("User {} attempted to use admin-only command '{}'", member, command.name);
            return Dispatch {
                outcome: Outcome::Denied,
                reply: Reply::channel(format!(
                    "You do not have permission to use {}{}.",
                    self.prefix, command.name
                )),
            };
        }

        let context = HandlerContext {
            invocation,
            commands: &self.commands,
            prefix: &self.prefix,
            shutdown: &self.shutdown,
        };
        let reply = (command.handler)(&context);
        info!("Command '{}' executed by user {}", command.name, member);

        Dispatch {
            outcome: Outcome::Executed,
            reply,
        }
    }

    /// Registered commands.
    pub const fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// The cooldown registry consulted by guarded commands.
    pub const fn cooldowns(&self) -> &Arc<CooldownRegistry> {
        &self.cooldowns
    }

    /// Configured command prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Token cancelled when a handler requests shutdown.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Signal shutdown and cancel all pending cooldown timers.
    pub async fn shutdown(&self) {
        self.shutdown.cancel();
        self.cooldowns.shutdown().await;
    }
}
