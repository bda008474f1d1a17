use super::*;

/// Tests that commands written by bots are ignored.
///
/// The bot's own replies must never be parsed as commands.
///
/// Expected: Ok with no reply and an empty store
#[tokio::test]
async fn ignores_bot_authors() -> Result<(), AppError> {
    let scores = ScoreStore::shared();
    let gateway = FakeGateway::new().with_role(AUTHOR_ID, RESET_ROLE);
    let router = CommandRouter::new(&scores, &gateway, RESET_ROLE);

    for content in ["!aktywnosc Ann 5", "!zliczenie", "!reset", "!aktywnosc"] {
        let mut message = guild_message(content);
        message.author_is_bot = true;
        router.handle(&message).await?;
    }

    assert!(gateway.sent().is_empty());
    assert!(scores.lock().await.is_empty());

    Ok(())
}

/// Tests that ordinary chat is ignored.
///
/// Expected: Ok with no reply
#[tokio::test]
async fn ignores_unrecognized_messages() -> Result<(), AppError> {
    let scores = ScoreStore::shared();
    let gateway = FakeGateway::new();
    let router = CommandRouter::new(&scores, &gateway, RESET_ROLE);

    for content in ["hello", "aktywnosc Ann 5", "!ZLICZENIE", ""] {
        router.handle(&guild_message(content)).await?;
    }

    assert!(gateway.sent().is_empty());

    Ok(())
}

/// Tests a bot-authored gateway message taken through the same conversion the
/// event handler uses.
///
/// Expected: Ok with no reply and an empty store
#[tokio::test]
async fn ignores_converted_bot_message() -> Result<(), AppError> {
    let scores = ScoreStore::shared();
    let gateway = FakeGateway::new();
    let router = CommandRouter::new(&scores, &gateway, RESET_ROLE);
    let message = test_utils::serenity::create_test_message(
        1,
        CHANNEL_ID,
        Some(GUILD_ID),
        AUTHOR_ID,
        true,
        "!aktywnosc Ann 5",
    );

    router.handle(&InboundMessage::from(&message)).await?;

    assert!(gateway.sent().is_empty());
    assert!(scores.lock().await.is_empty());

    Ok(())
}
