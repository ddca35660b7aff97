//! Admin commands for the bot

use crate::dispatcher::HandlerContext;
use crate::reply::Reply;
use tracing::info;

/// `kill`: ask the bot to log out.
pub fn kill(ctx: &HandlerContext<'_>) -> Reply {
    info!("Shutdown requested by user {}", ctx.invocation.member);
    ctx.shutdown.cancel();
    Reply::channel("Logging out.")
}
