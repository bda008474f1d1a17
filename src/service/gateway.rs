//! Seams between the scoring logic and the chat platform.
//!
//! The serenity-backed implementation lives in `bot::discord`; tests use
//! in-memory fakes.

use serenity::all::{ChannelId, GuildId, UserId};
use serenity::async_trait;

use crate::error::AppError;

/// Outbound side of the chat platform.
#[async_trait]
pub trait PlatformGateway: Send + Sync {
    /// Posts a text message to a channel.
    ///
    /// Delivery is not retried; an `Err` means the message was not posted.
    async fn send(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError>;

    /// Checks whether a guild member holds a role with the given name.
    async fn member_has_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_name: &str,
    ) -> Result<bool, AppError>;
}

/// Locates the channel scheduled reports are posted to.
#[async_trait]
pub trait ChannelResolver: Send + Sync {
    /// Returns the first text channel of the connected guild the bot may send
    /// messages in, or `None` if there is no such channel.
    async fn first_eligible_channel(&self) -> Result<Option<ChannelId>, AppError>;
}
