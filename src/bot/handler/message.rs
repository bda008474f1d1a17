use serenity::all::{Context, Message};

use crate::{
    bot::discord::DiscordGateway, data::score::SharedScoreStore, model::message::InboundMessage,
    service::command::CommandRouter,
};

/// Handle message creation in a channel
///
/// Hands every message to the command router, which drops bot and webhook
/// messages itself. Failures are logged and never propagate, so one bad reply
/// cannot stop the handler from processing the next message.
pub async fn handle_message(
    scores: &SharedScoreStore,
    reset_role: &str,
    ctx: Context,
    message: Message,
) {
    let inbound = InboundMessage::from(&message);
    let gateway = DiscordGateway::new(ctx.http.clone(), ctx.cache.clone());
    let router = CommandRouter::new(scores, &gateway, reset_role);

    if let Err(e) = router.handle(&inbound).await {
        tracing::error!(
            "Failed to handle message {} in channel {}: {}",
            message.id,
            message.channel_id,
            e
        );
    }
}
