use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::data::score::SharedScoreStore;
use crate::error::AppError;

/// Builds the Discord bot client
///
/// The client is returned unstarted so its HTTP client and cache can be shared
/// with the report scheduler before the gateway connection blocks.
///
/// # Arguments
/// - `config` - Application configuration
/// - `scores` - Score store shared with the scheduler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(config: &Config, scores: SharedScoreStore) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(scores, config.reset_role.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Returns only when the gateway connection shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
