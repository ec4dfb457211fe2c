//! Integration tests for JSON persistence.

use pickleball_round_robin::{
    start_tournament, SequentialIds, TournamentState, TournamentStore, STORAGE_KEY,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn started_state() -> TournamentState {
    let mut ids = SequentialIds::new("p");
    let mut t = TournamentState::new();
    for name in ["Ann", "Ben", "Cat", "Dan", "Eve"] {
        t.add_player(name, &mut ids).unwrap();
    }
    start_tournament(&mut t, &mut StdRng::seed_from_u64(1), &mut SequentialIds::new("m")).unwrap();
    t.record_score("m1", 11, 8).unwrap();
    t
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = TournamentStore::new(dir.path().join("nested"));
    assert!(store.path().ends_with(format!("{STORAGE_KEY}.json")));

    let state = started_state();
    store.save(&state).await.unwrap();
    assert_eq!(store.try_load().await.unwrap(), Some(state.clone()));
    assert_eq!(store.load().await, state);
}

#[tokio::test]
async fn missing_file_loads_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = TournamentStore::new(dir.path());
    assert_eq!(store.try_load().await.unwrap(), None);
    assert_eq!(store.load().await, TournamentState::new());
}

#[tokio::test]
async fn corrupt_file_falls_back_to_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = TournamentStore::new(dir.path());
    tokio::fs::write(store.path(), b"{ not json").await.unwrap();
    assert!(store.try_load().await.is_err());
    assert_eq!(store.load().await, TournamentState::new());
}

#[tokio::test]
async fn file_without_timestamp_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let store = TournamentStore::new(dir.path());
    let state = started_state();
    tokio::fs::write(store.path(), serde_json::to_vec(&state).unwrap())
        .await
        .unwrap();
    assert_eq!(store.load().await, state);
}

#[tokio::test]
async fn clear_removes_saved_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = TournamentStore::new(dir.path());
    store.save(&started_state()).await.unwrap();
    store.clear().await.unwrap();
    assert_eq!(store.try_load().await.unwrap(), None);
    // Clearing twice is fine.
    store.clear().await.unwrap();
}
