//! Poise glue between Discord prefix commands and the [`Dispatcher`].
//!
//! Every command wrapper here does the same thing: build an [`Invocation`]
//! from the Poise context, hand it to the dispatcher and deliver whatever
//! reply comes back. All gating (private channel, cooldown, admin) lives in
//! the dispatcher.

use crate::render;
use bobby_commands::{Dispatcher, Invocation, Reply, ReplyTarget};
use bobby_common::UserId;
use poise::serenity_prelude as serenity;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Shared state handed to every command.
#[derive(Debug)]
pub struct Data {
    /// Command dispatcher with its cooldown registry.
    pub dispatcher: Arc<Dispatcher>,
    /// Discord user ids granted admin rights by configuration.
    pub admin_ids: HashSet<u64>,
}

/// Error type used by the Poise framework.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Poise context specialised to [`Data`].
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Display a random quote from Bobby.
#[poise::command(prefix_command)]
pub async fn bobby(ctx: Context<'_>) -> Result<(), Error> {
    relay(ctx).await
}

/// Receive a one time access token by direct message.
#[poise::command(prefix_command)]
pub async fn access(ctx: Context<'_>) -> Result<(), Error> {
    relay(ctx).await
}

/// Display Bobby's connection latency.
#[poise::command(prefix_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    relay(ctx).await
}

/// Log Bobby out of Discord.
#[poise::command(prefix_command)]
pub async fn kill(ctx: Context<'_>) -> Result<(), Error> {
    relay(ctx).await
}

/// List the commands you can use.
#[poise::command(prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    relay(ctx).await
}

/// All Poise commands, one per built-in dispatcher command.
#[must_use]
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![bobby(), access(), ping(), kill(), help()]
}

/// Framework options for the given command prefix.
#[must_use]
pub fn options(prefix: &str) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: commands(),
        on_error: |error| Box::pin(on_error(error)),
        event_handler: |ctx, event, framework, data| {
            Box::pin(event_handler(ctx, event, framework, data))
        },
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(prefix.to_string()),
            mention_as_prefix: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

async fn relay(ctx: Context<'_>) -> Result<(), Error> {
    let author = ctx.author();
    let invocation = Invocation::new(ctx.command().name.clone(), UserId(author.id.get()))
        .private(ctx.guild_id().is_none())
        .admin(is_admin(ctx).await)
        .with_latency(ctx.ping().await);

    debug!(
        "{} invoked {} (private: {})",
        author.name, invocation.command, invocation.is_private
    );

    let Some(dispatch) = ctx.data().dispatcher.dispatch(&invocation) else {
        return Ok(());
    };
    deliver(ctx, dispatch.reply).await
}

/// Admin means listed in `discord.admin_ids` or holding the guild
/// Administrator permission.
async fn is_admin(ctx: Context<'_>) -> bool {
    if ctx.data().admin_ids.contains(&ctx.author().id.get()) {
        return true;
    }

    let Some(member) = ctx.author_member().await else {
        return false;
    };
    ctx.guild()
        .is_some_and(|guild| guild.member_permissions(&member).administrator())
}

async fn deliver(ctx: Context<'_>, reply: Reply) -> Result<(), Error> {
    match reply.target {
        ReplyTarget::Channel => {
            ctx.send(render::create_reply(&reply.body)).await?;
        }
        ReplyTarget::Author => {
            ctx.author()
                .direct_message(ctx.serenity_context(), render::create_message(&reply.body))
                .await?;
        }
    }
    Ok(())
}

async fn event_handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!(
                "Logged in as: {} ({})",
                data_about_bot.user.name, data_about_bot.user.id
            );
        }
        serenity::FullEvent::GuildCreate { guild, .. } => {
            info!("Joined guild: {} (ID: {})", guild.name, guild.id);
        }
        _ => {}
    }
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command '{}': {:?}", ctx.command().name, error);
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!(
                "Error in event handler for {:?}: {:?}",
                event.snake_case_name(),
                error
            );
        }
        poise::FrameworkError::UnknownCommand { msg_content, .. } => {
            debug!("Ignoring unknown command: {}", msg_content);
        }
        error => {
            error!("Other error: {:?}", error);
        }
    }
}
