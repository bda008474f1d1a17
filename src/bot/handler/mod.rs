use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::data::score::SharedScoreStore;

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub scores: SharedScoreStore,
    pub reset_role: String,
}

impl Handler {
    pub fn new(scores: SharedScoreStore, reset_role: String) -> Self {
        Self { scores, reset_role }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.scores, &self.reset_role, ctx, message).await;
    }
}
