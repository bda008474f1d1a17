use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    /// No text channel in the connected guild accepts messages from the bot.
    ///
    /// The scheduled report is skipped and the scores are kept for the next
    /// opportunity.
    #[error("No text channel available to post the leaderboard")]
    NoEligibleChannel,
}
