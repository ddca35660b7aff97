//! Gateway-agnostic reply payloads.

/// Discord's `Color.orange()`.
pub const ORANGE: u32 = 0x00E6_7E22;

/// Where a reply is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTarget {
    /// The channel the command was sent in.
    Channel,
    /// A direct message to the invoking member.
    Author,
}

/// A single embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    /// Field heading.
    pub name: String,
    /// Field body.
    pub value: String,
    /// Whether the field may share a row with its neighbours.
    pub inline: bool,
}

/// Structured reply content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    /// Author line shown above the title.
    pub author: Option<String>,
    /// Embed title.
    pub title: Option<String>,
    /// Embed description.
    pub description: Option<String>,
    /// Sidebar colour as `0xRRGGBB`.
    pub color: Option<u32>,
    /// Fields in display order.
    pub fields: Vec<EmbedField>,
}

impl Embed {
    /// Append a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }
}

/// Reply body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody {
    /// Plain message content.
    Text(String),
    /// Rich embed.
    Embed(Embed),
}

/// A message to send back through the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Delivery target.
    pub target: ReplyTarget,
    /// Content.
    pub body: ReplyBody,
}

impl Reply {
    /// Plain text to the originating channel.
    pub fn channel(text: impl Into<String>) -> Self {
        Self {
            target: ReplyTarget::Channel,
            body: ReplyBody::Text(text.into()),
        }
    }

    /// Plain text to the invoking member's DMs.
    pub fn direct(text: impl Into<String>) -> Self {
        Self {
            target: ReplyTarget::Author,
            body: ReplyBody::Text(text.into()),
        }
    }

    /// Embed to the originating channel.
    pub const fn embed(embed: Embed) -> Self {
        Self {
            target: ReplyTarget::Channel,
            body: ReplyBody::Embed(embed),
        }
    }

    /// Text content, if this is a text reply.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            ReplyBody::Text(text) => Some(text),
            ReplyBody::Embed(_) => None,
        }
    }
}
