use super::*;

/// Tests that a delivered leaderboard is followed by a reset.
///
/// Expected: Ok with the number of reported players and an empty store
#[tokio::test]
async fn resets_after_delivery() -> Result<(), AppError> {
    let scores = seeded_scores().await;
    let gateway = FakeGateway::new();
    let service = ReportService::new(&scores, &gateway);

    let reported = service
        .post_and_reset(ChannelId::new(CHANNEL_ID), None, None)
        .await?;

    assert_eq!(reported, 2);
    assert!(scores.lock().await.is_empty());
    assert_eq!(gateway.sent().len(), 1);

    Ok(())
}

/// Tests that the intro line is posted ahead of the table.
///
/// Expected: Ok with the composed content sent to the given channel
#[tokio::test]
async fn posts_composed_message() -> Result<(), AppError> {
    let scores = seeded_scores().await;
    let gateway = FakeGateway::new();
    let service = ReportService::new(&scores, &gateway);

    service
        .post_and_reset(ChannelId::new(42), Some("header"), None)
        .await?;

    let sent = gateway.sent();
    assert_eq!(sent[0].0, ChannelId::new(42));
    assert!(sent[0].1.starts_with("header\n```\nNick Gracza"));

    Ok(())
}

/// Tests that a failed delivery leaves the scores untouched.
///
/// Expected: Err with the gateway error, scores unchanged
#[tokio::test]
async fn failed_delivery_keeps_scores() {
    let scores = seeded_scores().await;
    let gateway = FakeGateway::new().failing_sends();
    let service = ReportService::new(&scores, &gateway);

    let result = service
        .post_and_reset(ChannelId::new(CHANNEL_ID), None, None)
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
    assert_eq!(
        scores.lock().await.all(),
        &[PlayerScore::new("Ann", 5.0), PlayerScore::new("Bob", 3.0)]
    );
}

/// Tests that points added concurrently with a report survive its reset.
///
/// The add cannot take the store lock until the report has finished, so it lands
/// after the reset instead of being cleared by it.
///
/// Expected: Ok with only the late points left in the store
#[tokio::test]
async fn points_added_during_delivery_survive_reset() -> Result<(), AppError> {
    let scores = seeded_scores().await;
    let gateway = FakeGateway::new();
    let service = ReportService::new(&scores, &gateway);

    let late_scores = scores.clone();
    let (reported, late_total) = tokio::join!(
        service.post_and_reset(ChannelId::new(CHANNEL_ID), None, None),
        async move {
            tokio::task::yield_now().await;
            late_scores.lock().await.add_points("Cid", 1.0).unwrap()
        }
    );

    assert_eq!(reported?, 2);
    assert_eq!(late_total, 1.0);
    assert_eq!(scores.lock().await.all(), &[PlayerScore::new("Cid", 1.0)]);

    Ok(())
}

/// Tests a leaderboard too large for a single Discord message.
///
/// The gateway rejects anything over the message limit, as Discord does.
///
/// Expected: Ok with every player reported over several messages, store emptied
#[tokio::test]
async fn large_leaderboard_is_posted_in_pages_then_reset() -> Result<(), AppError> {
    let scores = ScoreStore::shared();
    {
        let mut store = scores.lock().await;
        for i in 0..150 {
            store.add_points(&format!("Player{:03}", i), 1.0).unwrap();
        }
    }
    let gateway = FakeGateway::new().with_message_limit(leaderboard::MESSAGE_LIMIT);
    let service = ReportService::new(&scores, &gateway);

    let reported = service
        .post_and_reset(ChannelId::new(CHANNEL_ID), None, Some(messages::RESET_CONFIRMED))
        .await?;

    assert_eq!(reported, 150);
    assert!(scores.lock().await.is_empty());

    let sent = gateway.sent_contents();
    assert!(sent.len() > 1);
    assert!(sent[0].contains("Player000"));
    assert!(sent.last().unwrap().ends_with(messages::RESET_CONFIRMED));
    let rows: usize = sent.iter().map(|page| page.matches("Player").count()).sum();
    assert_eq!(rows, 150);

    Ok(())
}

/// Tests a paged leaderboard whose second message fails.
///
/// Expected: Err from the gateway, one page posted, scores unchanged
#[tokio::test]
async fn failed_later_page_keeps_scores() {
    let scores = ScoreStore::shared();
    {
        let mut store = scores.lock().await;
        for i in 0..150 {
            store.add_points(&format!("Player{:03}", i), 1.0).unwrap();
        }
    }
    let gateway = FakeGateway::new().failing_after(1);
    let service = ReportService::new(&scores, &gateway);

    let result = service
        .post_and_reset(ChannelId::new(CHANNEL_ID), None, None)
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
    assert_eq!(gateway.sent().len(), 1);
    assert_eq!(scores.lock().await.len(), 150);
}
