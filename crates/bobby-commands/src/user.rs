//! Commands available to every member.

use crate::dispatcher::HandlerContext;
use crate::quotes::random_quote;
use crate::reply::{Embed, Reply, ORANGE};
use rand::{distr::Alphanumeric, Rng};
use tracing::debug;

/// Length of the placeholder secret handed out by `access`.
pub const SECRET_LEN: usize = 22;

/// `bobby`: a random quote, in the channel.
pub fn bobby(_ctx: &HandlerContext<'_>) -> Reply {
    Reply::channel(random_quote())
}

/// `access`: a one time secret, sent privately.
///
/// The secret is display only; nothing stores or verifies it.
pub fn access(ctx: &HandlerContext<'_>) -> Reply {
    let secret = generate_secret(SECRET_LEN);
    debug!("Issued access secret to user {}", ctx.invocation.member);
    Reply::direct(format!("Here is your password secret: {secret}"))
}

/// `ping`: gateway latency in whole milliseconds.
pub fn ping(ctx: &HandlerContext<'_>) -> Reply {
    let millis = ctx
        .invocation
        .latency
        .map_or(0, |latency| (latency.as_micros() + 500) / 1000);
    Reply::channel(format!("My ping is {millis}ms!"))
}

/// `help`: every command visible to the invoker, in registration order.
/// Admin-only commands follow the rest and are shown to admins only.
pub fn help(ctx: &HandlerContext<'_>) -> Reply {
    let mut embed = Embed {
        author: Some("Help".to_string()),
        color: Some(ORANGE),
        ..Embed::default()
    };

    for command in ctx.commands.iter().filter(|c| !c.admin_only) {
        embed = embed.field(
            format!("{}{}", ctx.prefix, command.name),
            command.description,
            false,
        );
    }

    if ctx.invocation.is_admin {
        for command in ctx.commands.iter().filter(|c| c.admin_only) {
            embed = embed.field(
                format!("{}{}", ctx.prefix, command.name),
                command.description,
                false,
            );
        }
    }

    Reply::embed(embed)
}

/// Random URL-safe string of `len` characters.
pub fn generate_secret(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
