//! Chat command routing.
//!
//! Turns inbound messages into score operations and replies. Usage and permission
//! mistakes are answered in the channel and never treated as failures; only
//! gateway errors (a reply that could not be sent) are returned to the caller.

use crate::{
    data::score::SharedScoreStore,
    error::{auth::AuthError, AppError},
    model::{command::Command, message::InboundMessage, score::display_points},
    service::{gateway::PlatformGateway, messages, report::ReportService},
};

/// Routes chat commands to the score store.
pub struct CommandRouter<'a> {
    /// Scores mutated and reported by the commands
    pub scores: &'a SharedScoreStore,
    /// Gateway used for replies and role lookups
    pub gateway: &'a dyn PlatformGateway,
    /// Name of the role allowed to reset the scores
    pub reset_role: &'a str,
}

impl<'a> CommandRouter<'a> {
    /// Creates a new CommandRouter instance.
    ///
    /// # Arguments
    /// - `scores` - Shared score store
    /// - `gateway` - Outbound side of the chat platform
    /// - `reset_role` - Name of the role required by the reset command
    pub fn new(
        scores: &'a SharedScoreStore,
        gateway: &'a dyn PlatformGateway,
        reset_role: &'a str,
    ) -> Self {
        Self {
            scores,
            gateway,
            reset_role,
        }
    }

    /// Handles a single inbound message.
    ///
    /// Messages from bots and webhooks are dropped before parsing so the bot never
    /// reacts to its own replies. Messages that are not commands are ignored.
    ///
    /// # Arguments
    /// - `message` - The inbound message
    ///
    /// # Returns
    /// - `Ok(())` - Message handled (or ignored)
    /// - `Err(AppError::DiscordErr)` - A reply could not be sent
    pub async fn handle(&self, message: &InboundMessage) -> Result<(), AppError> {
        if message.author_is_bot {
            return Ok(());
        }

        let command = match Command::parse(&message.content) {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!("Rejected command from {}: {}", message.author_id, e);
                return self.reply(message, e.reply()).await;
            }
        };

        match command {
            Command::AddPoints { name, points } => self.add_points(message, &name, points).await,
            Command::Report => self.report(message).await,
            Command::Reset => self.reset(message).await,
            Command::Unrecognized => Ok(()),
        }
    }

    async fn add_points(
        &self,
        message: &InboundMessage,
        name: &str,
        points: f64,
    ) -> Result<(), AppError> {
        let result = self.scores.lock().await.add_points(name, points);
        let total = match result {
            Ok(total) => total,
            Err(e) => {
                tracing::debug!("Rejected points from {}: {}", message.author_id, e);
                return self.reply(message, e.reply()).await;
            }
        };

        tracing::debug!("Added {} points to {}, total {}", points, name, total);

        self.reply(message, &messages::points_added(name, &display_points(total)))
            .await
    }

    async fn report(&self, message: &InboundMessage) -> Result<(), AppError> {
        ReportService::new(self.scores, self.gateway)
            .post_leaderboard(message.channel_id)
            .await
    }

    /// Posts the leaderboard with a confirmation line, then clears the scores.
    ///
    /// Members without the reset role get a denial and nothing changes. If the
    /// reply cannot be sent the scores are kept.
    async fn reset(&self, message: &InboundMessage) -> Result<(), AppError> {
        if let Err(e) = self.authorize(message).await {
            tracing::warn!("Denied reset for {}: {}", message.author_id, e);
            return self.reply(message, e.reply()).await;
        }

        let reported = ReportService::new(self.scores, self.gateway)
            .post_and_reset(message.channel_id, None, Some(messages::RESET_CONFIRMED))
            .await?;

        tracing::info!(
            "Scores reset by {} after reporting {} players",
            message.author_id,
            reported
        );

        Ok(())
    }

    /// Checks that the author holds the reset role in the originating guild.
    ///
    /// A failed role lookup is logged and treated as a missing role.
    async fn authorize(&self, message: &InboundMessage) -> Result<(), AuthError> {
        let guild_id = message.guild_id.ok_or(AuthError::NotInGuild)?;

        let has_role = match self
            .gateway
            .member_has_role(guild_id, message.author_id, self.reset_role)
            .await
        {
            Ok(has_role) => has_role,
            Err(e) => {
                tracing::error!(
                    "Failed to look up roles of {} in guild {}: {}",
                    message.author_id,
                    guild_id,
                    e
                );
                false
            }
        };

        if has_role {
            Ok(())
        } else {
            Err(AuthError::MissingRole {
                role: self.reset_role.to_string(),
            })
        }
    }

    async fn reply(&self, message: &InboundMessage, content: &str) -> Result<(), AppError> {
        self.gateway.send(message.channel_id, content).await
    }
}
