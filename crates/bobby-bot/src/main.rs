//! Bobby Bot - Main entry point

use anyhow::Result;
use bobby_bot::{Args, BobbyBot};
use bobby_common::init_logging;
use bobby_config::ConfigLoader;
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // A missing .env file is fine
    dotenv::dotenv().ok();

    let mut config = ConfigLoader::load(args.config.as_deref())?;
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    let _log_guard = init_logging(&config.logging)?;

    info!("Starting Bobby Bot");
    info!(
        "Configuration loaded (prefix: {}, admins: {})",
        config.commands.prefix,
        config.discord.admin_ids.len()
    );

    let bot = BobbyBot::new(config);
    if let Err(why) = bot.start().await {
        error!("Client error: {:?}", why);
        return Err(why.into());
    }

    Ok(())
}
