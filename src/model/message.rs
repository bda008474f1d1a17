//! Inbound chat message model

use serenity::all::{ChannelId, GuildId, Message, UserId};

/// The parts of a Discord message the command router needs
///
/// Converted from serenity's `Message` at the bot boundary so the router can be
/// driven directly in tests.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub author_id: UserId,
    /// Bot accounts and webhooks, including this bot itself
    pub author_is_bot: bool,
    /// `None` for direct messages
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub content: String,
}

impl From<&Message> for InboundMessage {
    fn from(message: &Message) -> Self {
        Self {
            author_id: message.author.id,
            author_is_bot: message.author.bot || message.webhook_id.is_some(),
            guild_id: message.guild_id,
            channel_id: message.channel_id,
            content: message.content.clone(),
        }
    }
}
