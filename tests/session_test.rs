use recspot::session::{SessionStore, generate_session_id, generate_state};
use recspot::types::Token;

// Helper function to create a test token
fn create_test_token(access_token: &str) -> Token {
    Token {
        access_token: access_token.to_string(),
        refresh_token: "refresh".to_string(),
        scope: "playlist-modify-private playlist-modify-public".to_string(),
        expires_in: 3600,
        obtained_at: 0,
    }
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    // Should be exactly 32 characters
    assert_eq!(state.len(), 32);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated states should be different
    let state2 = generate_state();
    assert_ne!(state, state2);
}

#[test]
fn test_generate_session_id() {
    let id = generate_session_id();

    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(id, generate_session_id());
}

#[tokio::test]
async fn test_state_roundtrip() {
    let store = SessionStore::new();

    store.put_state("sess-1", "state-a".to_string()).await;
    assert_eq!(store.state("sess-1").await.as_deref(), Some("state-a"));

    // Reading does not consume
    assert_eq!(store.state("sess-1").await.as_deref(), Some("state-a"));
}

#[tokio::test]
async fn test_put_state_overwrites_previous_value() {
    let store = SessionStore::new();

    store.put_state("sess-1", "first".to_string()).await;
    store.put_state("sess-1", "second".to_string()).await;

    // Last write wins
    assert_eq!(store.state("sess-1").await.as_deref(), Some("second"));
}

#[tokio::test]
async fn test_take_state_consumes() {
    let store = SessionStore::new();

    store.put_state("sess-1", "state-a".to_string()).await;
    assert_eq!(store.take_state("sess-1").await.as_deref(), Some("state-a"));

    // Gone after the take; a second take yields nothing
    assert!(store.state("sess-1").await.is_none());
    assert!(store.take_state("sess-1").await.is_none());
}

#[tokio::test]
async fn test_token_storage_is_independent_of_state() {
    let store = SessionStore::new();

    store.put_state("sess-1", "state-a".to_string()).await;
    store.put_token("sess-1", create_test_token("token-a")).await;
    store.take_state("sess-1").await;

    // Consuming the state leaves the token in place
    let token = store.token("sess-1").await.expect("token kept");
    assert_eq!(token.access_token, "token-a");
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let store = SessionStore::new();

    store.put_state("sess-1", "state-a".to_string()).await;
    store.put_token("sess-2", create_test_token("token-b")).await;

    assert!(store.state("sess-2").await.is_none());
    assert!(store.token("sess-1").await.is_none());
    assert_eq!(store.state("sess-1").await.as_deref(), Some("state-a"));
    assert_eq!(
        store.token("sess-2").await.map(|t| t.access_token).as_deref(),
        Some("token-b")
    );
}

#[tokio::test]
async fn test_unknown_session_is_empty() {
    let store = SessionStore::new();

    assert!(store.state("nope").await.is_none());
    assert!(store.token("nope").await.is_none());
}

#[tokio::test]
async fn test_clear_drops_everything() {
    let store = SessionStore::new();

    store.put_state("sess-1", "state-a".to_string()).await;
    store.put_token("sess-1", create_test_token("token-a")).await;
    store.clear("sess-1").await;

    assert!(store.state("sess-1").await.is_none());
    assert!(store.token("sess-1").await.is_none());
}

#[tokio::test]
async fn test_clones_share_the_same_map() {
    let store = SessionStore::new();
    let clone = store.clone();

    clone.put_token("sess-1", create_test_token("token-a")).await;

    let token = store.token("sess-1").await.expect("shared entry");
    assert_eq!(token.access_token, "token-a");
}
