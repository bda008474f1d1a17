use super::*;

/// Tests that reset clears every entry.
///
/// Expected: empty store, previous totals read as 0
#[test]
fn clears_all_entries() {
    let mut store = ScoreStore::new();
    store.add_points("Ann", 5.0).unwrap();
    store.add_points("Bob", -2.0).unwrap();

    store.reset();

    assert!(store.all().is_empty());
    assert_eq!(store.get("Ann"), 0.0);
}

/// Tests resetting an already empty store.
///
/// Expected: still empty, no panic
#[test]
fn reset_on_empty_store_is_noop() {
    let mut store = ScoreStore::new();

    store.reset();

    assert!(store.is_empty());
}

/// Tests that points added after a reset start from zero.
///
/// Verifies the first-mention order is rebuilt from scratch as well.
///
/// Expected: only post-reset deltas counted, new order
#[test]
fn totals_restart_after_reset() {
    let mut store = ScoreStore::new();
    store.add_points("Ann", 5.0).unwrap();
    store.add_points("Bob", 3.0).unwrap();

    store.reset();
    store.add_points("Bob", 1.0).unwrap();
    store.add_points("Ann", 2.0).unwrap();

    assert_eq!(
        store.all(),
        &[PlayerScore::new("Bob", 1.0), PlayerScore::new("Ann", 2.0)]
    );
}

/// Tests that a freshly created shared store starts empty.
///
/// Scores are not persisted, so this is the state after every restart.
///
/// Expected: empty store
#[tokio::test]
async fn new_shared_store_is_empty() {
    let store = ScoreStore::shared();

    assert!(store.lock().await.is_empty());
}
