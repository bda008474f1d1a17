use super::*;

/// Tests a scheduled report with an eligible channel.
///
/// Verifies that the leaderboard is posted to the resolved channel with the
/// introductory line and that the scores are cleared afterwards.
///
/// Expected: Ok with one post and an empty store
#[tokio::test]
async fn posts_with_intro_and_resets() -> Result<(), AppError> {
    let scores = seeded_scores().await;
    let gateway = FakeGateway::new();
    let resolver = FakeResolver::channel(99);

    let reported = ReportService::new(&scores, &gateway)
        .post_scheduled_report(&resolver)
        .await?;

    assert_eq!(reported, 2);
    let sent = gateway.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, ChannelId::new(99));
    assert!(sent[0]
        .1
        .starts_with(&format!("{}\n```", messages::SCHEDULED_REPORT_INTRO)));
    assert!(sent[0].1.contains("Bob            | 3"));
    assert!(scores.lock().await.is_empty());

    Ok(())
}

/// Tests a scheduled report when no channel accepts messages from the bot.
///
/// Expected: Err(NoEligibleChannel), nothing posted, scores unchanged
#[tokio::test]
async fn missing_channel_skips_send_and_reset() {
    let scores = seeded_scores().await;
    let gateway = FakeGateway::new();
    let resolver = FakeResolver::no_channel();

    let result = ReportService::new(&scores, &gateway)
        .post_scheduled_report(&resolver)
        .await;

    assert!(matches!(
        result,
        Err(AppError::DeliveryErr(DeliveryError::NoEligibleChannel))
    ));
    assert!(gateway.sent().is_empty());
    assert_eq!(
        scores.lock().await.all(),
        &[PlayerScore::new("Ann", 5.0), PlayerScore::new("Bob", 3.0)]
    );
}

/// Tests a scheduled report when the channel lookup fails.
///
/// Expected: Err from the resolver, nothing posted, scores unchanged
#[tokio::test]
async fn failed_channel_lookup_skips_send_and_reset() {
    let scores = seeded_scores().await;
    let gateway = FakeGateway::new();
    let resolver = FakeResolver::failing();

    let result = ReportService::new(&scores, &gateway)
        .post_scheduled_report(&resolver)
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
    assert!(gateway.sent().is_empty());
    assert_eq!(scores.lock().await.len(), 2);
}

/// Tests a scheduled report whose post is rejected by Discord.
///
/// Expected: Err from the gateway, scores unchanged
#[tokio::test]
async fn failed_send_keeps_scores() {
    let scores = seeded_scores().await;
    let gateway = FakeGateway::new().failing_sends();
    let resolver = FakeResolver::channel(99);

    let result = ReportService::new(&scores, &gateway)
        .post_scheduled_report(&resolver)
        .await;

    assert!(result.is_err());
    assert_eq!(scores.lock().await.len(), 2);
}

/// Tests a scheduled report with nothing recorded.
///
/// The empty table is still posted so the guild sees the period closed.
///
/// Expected: Ok(0) with one post
#[tokio::test]
async fn posts_empty_leaderboard() -> Result<(), AppError> {
    let scores = ScoreStore::shared();
    let gateway = FakeGateway::new();
    let resolver = FakeResolver::channel(99);

    let reported = ReportService::new(&scores, &gateway)
        .post_scheduled_report(&resolver)
        .await?;

    assert_eq!(reported, 0);
    assert_eq!(gateway.sent().len(), 1);

    Ok(())
}

/// Tests a scheduled report for more players than fit in one Discord message.
///
/// Expected: Ok with the intro leading the first page, every page within the
/// message limit and an empty store
#[tokio::test]
async fn large_leaderboard_still_resets() -> Result<(), AppError> {
    let scores = ScoreStore::shared();
    {
        let mut store = scores.lock().await;
        for i in 0..150 {
            store.add_points(&format!("Player{:03}", i), i as f64).unwrap();
        }
    }
    let gateway = FakeGateway::new().with_message_limit(leaderboard::MESSAGE_LIMIT);
    let resolver = FakeResolver::channel(99);

    let reported = ReportService::new(&scores, &gateway)
        .post_scheduled_report(&resolver)
        .await?;

    assert_eq!(reported, 150);
    assert!(scores.lock().await.is_empty());

    let sent = gateway.sent_contents();
    assert!(sent.len() > 1);
    assert!(sent[0].starts_with(messages::SCHEDULED_REPORT_INTRO));
    assert!(sent
        .iter()
        .all(|page| page.chars().count() <= leaderboard::MESSAGE_LIMIT));

    Ok(())
}
