//! Serenity-backed implementation of the platform traits.
//!
//! Lookups go to the gateway cache first and fall back to the HTTP API when the
//! cache has not seen the member or guild yet. Cache references are never held
//! across an `.await`.

use std::collections::HashMap;
use std::sync::Arc;

use serenity::all::{
    Cache, ChannelId, ChannelType, CreateMessage, GuildId, Member, Permissions, Role, RoleId,
    UserId,
};
use serenity::async_trait;
use serenity::http::Http;

use crate::{
    error::AppError,
    service::gateway::{ChannelResolver, PlatformGateway},
};

/// Discord gateway backed by the bot client's HTTP client and cache.
#[derive(Clone)]
pub struct DiscordGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    /// Fetches a guild member, preferring the cache.
    async fn member(&self, guild_id: GuildId, user_id: UserId) -> Result<Member, AppError> {
        let cached = self
            .cache
            .member(guild_id, user_id)
            .map(|member| Member::clone(&member));

        match cached {
            Some(member) => Ok(member),
            None => Ok(self.http.get_member(guild_id, user_id).await?),
        }
    }

    /// Fetches the roles of a guild, preferring the cache.
    async fn roles(&self, guild_id: GuildId) -> Result<HashMap<RoleId, Role>, AppError> {
        let cached = self.cache.guild(guild_id).map(|guild| guild.roles.clone());

        match cached {
            Some(roles) => Ok(roles),
            None => Ok(guild_id.roles(&self.http).await?),
        }
    }
}

#[async_trait]
impl PlatformGateway for DiscordGateway {
    async fn send(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        let message = CreateMessage::new().content(content);

        channel_id.send_message(&self.http, message).await?;

        Ok(())
    }

    async fn member_has_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_name: &str,
    ) -> Result<bool, AppError> {
        let member = self.member(guild_id, user_id).await?;
        let roles = self.roles(guild_id).await?;

        Ok(has_named_role(&member.roles, &roles, role_name))
    }
}

#[async_trait]
impl ChannelResolver for DiscordGateway {
    /// Picks the first text channel of the connected guild the bot can post in.
    ///
    /// The bot is expected to be in a single guild; if it is in several, the first
    /// one reported by the cache is used.
    async fn first_eligible_channel(&self) -> Result<Option<ChannelId>, AppError> {
        let guild_ids = self.cache.guilds();
        let Some(&guild_id) = guild_ids.first() else {
            tracing::warn!("Bot is not connected to any guild");
            return Ok(None);
        };

        if guild_ids.len() > 1 {
            tracing::warn!(
                "Bot is in {} guilds, reporting to guild {} only",
                guild_ids.len(),
                guild_id
            );
        }

        let bot_id = self.cache.current_user().id;
        let bot_member = self.member(guild_id, bot_id).await?;

        let candidates: Vec<ChannelCandidate> = match self.cache.guild(guild_id) {
            Some(guild) => guild
                .channels
                .values()
                .map(|channel| ChannelCandidate {
                    id: channel.id,
                    kind: channel.kind,
                    position: channel.position,
                    can_send: guild
                        .user_permissions_in(channel, &bot_member)
                        .contains(Permissions::SEND_MESSAGES),
                })
                .collect(),
            None => {
                tracing::warn!("Guild {} is not in the cache yet", guild_id);
                Vec::new()
            }
        };

        Ok(select_eligible_channel(&candidates))
    }
}

/// What the channel resolver needs to know about a guild channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelCandidate {
    pub id: ChannelId,
    pub kind: ChannelType,
    pub position: u16,
    /// Whether the bot's computed permissions include sending messages
    pub can_send: bool,
}

impl ChannelCandidate {
    fn is_eligible(&self) -> bool {
        matches!(self.kind, ChannelType::Text | ChannelType::News) && self.can_send
    }
}

/// Picks the eligible channel shown first in the channel list.
///
/// Channels are ordered by position, ties broken by id, so the choice does not
/// depend on the cache's map order.
pub fn select_eligible_channel(candidates: &[ChannelCandidate]) -> Option<ChannelId> {
    candidates
        .iter()
        .filter(|candidate| candidate.is_eligible())
        .min_by_key(|candidate| (candidate.position, candidate.id))
        .map(|candidate| candidate.id)
}

/// Checks whether any of a member's roles has the given name.
///
/// Role names are compared exactly. Role ids unknown to the guild are skipped.
pub fn has_named_role(
    member_roles: &[RoleId],
    guild_roles: &HashMap<RoleId, Role>,
    role_name: &str,
) -> bool {
    member_roles
        .iter()
        .filter_map(|role_id| guild_roles.get(role_id))
        .any(|role| role.name == role_name)
}
