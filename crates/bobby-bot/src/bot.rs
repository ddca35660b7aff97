//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use crate::framework::{self, Data};
use bobby_commands::Dispatcher;
use bobby_config::Config;
use poise::serenity_prelude as serenity;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{error, info};

/// Main bot structure.
pub struct BobbyBot {
    config: Arc<Config>,
    dispatcher: Arc<Dispatcher>,
}

impl BobbyBot {
    /// Creates a new bot instance.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let dispatcher = Arc::new(Dispatcher::from_config(&config.commands));
        Self {
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// The dispatcher shared with every command.
    #[must_use]
    pub const fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Gateway intents needed for prefix commands in guilds and DMs.
    #[must_use]
    pub fn intents() -> serenity::GatewayIntents {
        serenity::GatewayIntents::GUILDS
            | serenity::GatewayIntents::GUILD_MESSAGES
            | serenity::GatewayIntents::DIRECT_MESSAGES
            | serenity::GatewayIntents::MESSAGE_CONTENT
    }

    /// Connects to Discord and runs until logout or Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built or the gateway
    /// connection fails.
    pub async fn start(&self) -> BotResult<()> {
        let dispatcher = Arc::clone(&self.dispatcher);
        let admin_ids: HashSet<u64> = self.config.discord.admin_ids.iter().copied().collect();
        let guild = self.config.discord.guild.clone();

        let framework = poise::Framework::builder()
            .options(framework::options(&self.config.commands.prefix))
            .setup(move |_ctx, ready, _framework| {
                info!("Bobby is ready as {}", ready.user.name);
                if let Some(guild) = &guild {
                    info!("Serving guild: {}", guild);
                }
                let data = Data {
                    dispatcher: Arc::clone(&dispatcher),
                    admin_ids: admin_ids.clone(),
                };
                Box::pin(async move { Ok(data) })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, Self::intents())
            .framework(framework)
            .await?;

        info!("Discord client created");

        let shard_manager = Arc::clone(&client.shard_manager);
        let logout = self.dispatcher.shutdown_token();
        tokio::spawn(async move {
            tokio::select! {
                () = logout.cancelled() => info!("Logout requested, disconnecting"),
                result = tokio::signal::ctrl_c() => match result {
                    Ok(()) => info!("Received shutdown signal, disconnecting"),
                    Err(e) => {
                        error!("Failed to listen for shutdown signal: {:?}", e);
                        logout.cancelled().await;
                    }
                },
            }
            shard_manager.shutdown_all().await;
        });

        info!("Bobby Bot is starting up...");
        let result = client.start().await;

        self.dispatcher.shutdown().await;
        info!("Bobby Bot has shut down");

        result.map_err(Into::into)
    }
}
