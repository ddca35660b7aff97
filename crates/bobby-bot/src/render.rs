//! Conversion of platform-neutral replies into Discord builders.

use bobby_commands::{Embed, ReplyBody};
use poise::serenity_prelude as serenity;

/// Build a Discord embed.
#[must_use]
pub fn create_embed(embed: &Embed) -> serenity::CreateEmbed {
    let mut out = serenity::CreateEmbed::new();
    if let Some(author) = &embed.author {
        out = out.author(serenity::CreateEmbedAuthor::new(author));
    }
    if let Some(title) = &embed.title {
        out = out.title(title);
    }
    if let Some(description) = &embed.description {
        out = out.description(description);
    }
    if let Some(color) = embed.color {
        out = out.colour(color);
    }
    out.fields(
        embed
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
    )
}

/// Build a reply sent in the invoking channel.
#[must_use]
pub fn create_reply(body: &ReplyBody) -> poise::CreateReply {
    match body {
        ReplyBody::Text(text) => poise::CreateReply::default().content(text.clone()),
        ReplyBody::Embed(embed) => poise::CreateReply::default().embed(create_embed(embed)),
    }
}

/// Build a direct message.
#[must_use]
pub fn create_message(body: &ReplyBody) -> serenity::CreateMessage {
    match body {
        ReplyBody::Text(text) => serenity::CreateMessage::new().content(text.clone()),
        ReplyBody::Embed(embed) => serenity::CreateMessage::new().embed(create_embed(embed)),
    }
}
