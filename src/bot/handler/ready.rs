//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. Scheduled
//! reports can only find a channel once the guild from this handshake has been
//! cached, so the guild count is logged here as well.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    if ready.guilds.len() > 1 {
        tracing::warn!("Scores are shared between all guilds the bot is in");
    }
}
