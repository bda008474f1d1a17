//! Leaderboard delivery.
//!
//! Every reset in the bot goes through `ReportService::post_and_reset`, which only
//! clears the scores after the leaderboard has been posted. The store lock is held
//! from rendering until the reset, so points added while the messages are in flight
//! wait for the reset instead of being silently dropped by it.

use serenity::all::ChannelId;

use crate::{
    data::score::SharedScoreStore,
    error::{delivery::DeliveryError, AppError},
    service::{
        gateway::{ChannelResolver, PlatformGateway},
        leaderboard, messages,
    },
};

/// Service struct for posting leaderboards.
pub struct ReportService<'a> {
    /// Scores to report
    pub scores: &'a SharedScoreStore,
    /// Gateway used to post the leaderboard
    pub gateway: &'a dyn PlatformGateway,
}

impl<'a> ReportService<'a> {
    /// Creates a new ReportService instance.
    ///
    /// # Arguments
    /// - `scores` - Shared score store
    /// - `gateway` - Outbound side of the chat platform
    pub fn new(scores: &'a SharedScoreStore, gateway: &'a dyn PlatformGateway) -> Self {
        Self { scores, gateway }
    }

    /// Posts the current leaderboard without touching the scores.
    ///
    /// # Arguments
    /// - `channel_id` - Channel to post in
    ///
    /// # Returns
    /// - `Ok(())` - Every page of the leaderboard posted
    /// - `Err(AppError::DiscordErr)` - Failed to send a page
    pub async fn post_leaderboard(&self, channel_id: ChannelId) -> Result<(), AppError> {
        let pages = {
            let scores = self.scores.lock().await;
            leaderboard::paginate(scores.all(), leaderboard::MESSAGE_LIMIT)
        };

        self.send_pages(channel_id, &pages).await
    }

    /// Posts the leaderboard and then clears the scores.
    ///
    /// `intro` is posted before the table and `outro` after it, sharing a message
    /// with the table when there is room. The scores are cleared only once every
    /// message was sent; if a later page fails, the pages already posted stay in
    /// the channel and the scores are kept.
    ///
    /// # Arguments
    /// - `channel_id` - Channel to post in
    /// - `intro` - Optional line posted before the table
    /// - `outro` - Optional line posted after the table
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of players that were reported and cleared
    /// - `Err(AppError::DiscordErr)` - Failed to send a message; scores kept
    pub async fn post_and_reset(
        &self,
        channel_id: ChannelId,
        intro: Option<&str>,
        outro: Option<&str>,
    ) -> Result<usize, AppError> {
        let mut scores = self.scores.lock().await;
        let pages = leaderboard::frame_pages(
            leaderboard::paginate(scores.all(), leaderboard::MESSAGE_LIMIT),
            intro,
            outro,
            leaderboard::MESSAGE_LIMIT,
        );

        self.send_pages(channel_id, &pages).await?;

        let reported = scores.len();
        scores.reset();

        Ok(reported)
    }

    /// Posts the scheduled leaderboard to the first eligible channel and clears
    /// the scores.
    ///
    /// # Arguments
    /// - `resolver` - Locates the channel to post in
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of players that were reported and cleared
    /// - `Err(AppError::DeliveryErr(NoEligibleChannel))` - No channel accepts messages
    ///   from the bot; scores kept
    /// - `Err(AppError::DiscordErr)` - Channel lookup or send failed; scores kept
    pub async fn post_scheduled_report(
        &self,
        resolver: &dyn ChannelResolver,
    ) -> Result<usize, AppError> {
        let channel_id = resolver
            .first_eligible_channel()
            .await?
            .ok_or(DeliveryError::NoEligibleChannel)?;

        self.post_and_reset(channel_id, Some(messages::SCHEDULED_REPORT_INTRO), None)
            .await
    }

    /// Sends messages in order, stopping at the first failure.
    async fn send_pages(&self, channel_id: ChannelId, pages: &[String]) -> Result<(), AppError> {
        for page in pages {
            self.gateway.send(channel_id, page).await?;
        }

        Ok(())
    }
}
