//! Command registry for managing bot commands

use crate::dispatcher::HandlerContext;
use crate::reply::Reply;
use crate::{admin, user};
use bobby_config::{CommandsConfig, DEFAULT_ACCESS_COOLDOWN_SECS};
use std::time::Duration;

/// A command handler. Collaborators arrive through the context.
pub type Handler = fn(&HandlerContext<'_>) -> Reply;

/// Static metadata and behaviour of one command.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    /// Name the command is invoked by, without prefix.
    pub name: &'static str,
    /// One line description shown by `help`.
    pub description: &'static str,
    /// Only administrators may run the command.
    pub admin_only: bool,
    /// The command is refused in direct messages.
    pub guild_only: bool,
    /// Per-member lockout applied after each accepted invocation.
    pub cooldown: Option<Duration>,
    /// Handler run once every guard passed.
    pub handler: Handler,
}

impl CommandDescriptor {
    /// A command without guards.
    pub const fn new(name: &'static str, description: &'static str, handler: Handler) -> Self {
        Self {
            name,
            description,
            admin_only: false,
            guild_only: false,
            cooldown: None,
            handler,
        }
    }

    /// Restrict to administrators.
    #[must_use]
    pub const fn admin_only(mut self) -> Self {
        self.admin_only = true;
        self
    }

    /// Refuse invocations from private channels.
    #[must_use]
    pub const fn guild_only(mut self) -> Self {
        self.guild_only = true;
        self
    }

    /// Lock members out for `cooldown` after each use.
    #[must_use]
    pub const fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = Some(cooldown);
        self
    }
}

/// Commands in registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// The bot's command set. Cooldowns from `config` override or add to
    /// the built-in ones.
    pub fn builtin(config: &CommandsConfig) -> Self {
        let mut registry = Self::new();
        registry.register(CommandDescriptor::new(
            "bobby",
            "Display a random quote from Bobby.",
            user::bobby,
        ));
        registry.register(
            CommandDescriptor::new(
                "access",
                "Provides the user with a one time access token to view/download files.",
                user::access,
            )
            .guild_only()
            .with_cooldown(Duration::from_secs(DEFAULT_ACCESS_COOLDOWN_SECS)),
        );
        registry.register(CommandDescriptor::new(
            "ping",
            "Check the client's latency.",
            user::ping,
        ));
        registry.register(
            CommandDescriptor::new("kill", "Force the client to logout.", admin::kill).admin_only(),
        );
        registry.register(
            CommandDescriptor::new("help", "List available commands.", user::help).guild_only(),
        );

        for command in &mut registry.commands {
            if let Some(cooldown) = config.cooldown(command.name) {
                command.cooldown = Some(cooldown);
            }
        }

        registry
    }

    /// Register a command. A later registration under the same name
    /// replaces the earlier one in place, keeping its position.
    pub fn register(&mut self, descriptor: CommandDescriptor) {
        match self.commands.iter_mut().find(|c| c.name == descriptor.name) {
            Some(existing) => *existing = descriptor,
            None => self.commands.push(descriptor),
        }
    }

    /// Look a command up by name.
    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
