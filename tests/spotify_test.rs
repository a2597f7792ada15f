use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use recspot::{
    config::Config,
    error::Error,
    spotify::{self, Step},
};

type CallLog = Arc<Mutex<Vec<String>>>;

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn config_for(addr: SocketAddr) -> Config {
    let base = format!("http://{addr}");
    Config {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        redirect_uri: "http://127.0.0.1:8020/callback".to_string(),
        auth_url: format!("{base}/authorize"),
        token_url: format!("{base}/api/token"),
        api_url: base,
        server_addr: "127.0.0.1:0".to_string(),
        scope: "playlist-modify-private playlist-modify-public".to_string(),
    }
}

#[test]
fn authorize_url_carries_the_fixed_response_type_and_encoded_params() {
    let cfg = config_for("127.0.0.1:9999".parse().unwrap());
    let url = spotify::auth::build_authorize_url(&cfg, "the-state-value");

    assert!(url.starts_with(&cfg.auth_url));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("client_id=test-client-id"));
    assert!(url.contains("state=the-state-value"));

    // Reserved characters in the redirect URI and scope must be escaped
    assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8020%2Fcallback"));
    assert!(url.contains("scope=playlist-modify-private+playlist-modify-public"));
}

#[tokio::test]
async fn exchange_code_returns_the_token_fields() {
    let app = Router::new().route(
        "/api/token",
        post(|| async {
            Json(json!({
                "access_token": "acc-1",
                "refresh_token": "ref-1",
                "scope": "playlist-modify-private",
                "expires_in": 1800
            }))
        }),
    );
    let cfg = config_for(spawn(app).await);

    let token = spotify::auth::exchange_code(&cfg, "the-code").await.unwrap();

    assert_eq!(token.access_token, "acc-1");
    assert_eq!(token.refresh_token, "ref-1");
    assert_eq!(token.scope, "playlist-modify-private");
    assert_eq!(token.expires_in, 1800);
    assert!(token.obtained_at > 0);
}

#[tokio::test]
async fn exchange_code_rejection_is_a_token_exchange_error() {
    let app = Router::new().route(
        "/api/token",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "invalid_grant"})),
            )
        }),
    );
    let cfg = config_for(spawn(app).await);

    let err = spotify::auth::exchange_code(&cfg, "expired-code")
        .await
        .unwrap_err();

    match err {
        Error::TokenExchange(detail) => {
            assert!(detail.contains("400"));
            assert!(detail.contains("invalid_grant"));
        }
        other => panic!("expected TokenExchange, got {other:?}"),
    }
}

#[tokio::test]
async fn exchange_code_without_access_token_is_invalid() {
    let app = Router::new().route(
        "/api/token",
        post(|| async { Json(json!({"token_type": "Bearer"})) }),
    );
    let cfg = config_for(spawn(app).await);

    let err = spotify::auth::exchange_code(&cfg, "the-code")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidTokenResponse(_)));
}

#[tokio::test]
async fn exchange_code_transport_failure_is_a_network_error() {
    // Nothing listens on port 1
    let cfg = config_for("127.0.0.1:1".parse().unwrap());

    let err = spotify::auth::exchange_code(&cfg, "the-code")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn create_and_populate_rejects_empty_track_lists_without_calls() {
    let log: CallLog = CallLog::default();
    let addr = spawn(provider_router(log.clone(), "")).await;
    let cfg = config_for(addr);

    let err = spotify::playlist::create_and_populate(&cfg, "tok", Vec::new(), "Empty")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::EmptyTrackList));
    assert!(log.lock().await.is_empty());
}

/// Stub provider whose `fail_at` step answers 500; everything else succeeds.
fn provider_router(log: CallLog, fail_at: &'static str) -> Router {
    async fn record(log: &CallLog, name: &str) {
        log.lock().await.push(name.to_string());
    }

    Router::new()
        .route(
            "/me",
            get({
                let log = log.clone();
                move || async move {
                    record(&log, "me").await;
                    if fail_at == "me" {
                        return Err(StatusCode::INTERNAL_SERVER_ERROR);
                    }
                    Ok(Json(json!({"id": "user-1"})))
                }
            }),
        )
        .route(
            "/users/{user_id}/playlists",
            post({
                let log = log.clone();
                move || async move {
                    record(&log, "create").await;
                    if fail_at == "create" {
                        return Err(StatusCode::INTERNAL_SERVER_ERROR);
                    }
                    Ok(Json(json!({"id": "playlist-0", "name": "x"})))
                }
            }),
        )
        .route(
            "/playlists/{playlist_id}/tracks",
            post({
                let log = log.clone();
                move || async move {
                    record(&log, "add").await;
                    if fail_at == "add" {
                        return Err(StatusCode::INTERNAL_SERVER_ERROR);
                    }
                    Ok(Json(json!({"snapshot_id": "snap-1"})))
                }
            }),
        )
}

async fn run_orchestration(fail_at: &'static str) -> (Result<String, Error>, Vec<String>) {
    let log: CallLog = CallLog::default();
    let addr = spawn(provider_router(log.clone(), fail_at)).await;
    let cfg = config_for(addr);

    let result = spotify::playlist::create_and_populate(
        &cfg,
        "tok",
        vec!["spotify:track:one".to_string()],
        "Test Playlist",
    )
    .await;

    let calls = log.lock().await.clone();
    (result, calls)
}

#[tokio::test]
async fn orchestration_happy_path_returns_the_playlist_id() {
    let (result, calls) = run_orchestration("").await;

    assert_eq!(result.unwrap(), "playlist-0");
    assert_eq!(calls, ["me", "create", "add"]);
}

#[tokio::test]
async fn user_lookup_failure_stops_before_creation() {
    let (result, calls) = run_orchestration("me").await;

    match result.unwrap_err() {
        Error::Upstream { step, .. } => assert_eq!(step, Step::ResolvingUser),
        other => panic!("expected Upstream, got {other:?}"),
    }
    assert_eq!(calls, ["me"]);
}

#[tokio::test]
async fn creation_failure_stops_before_adding_tracks() {
    let (result, calls) = run_orchestration("create").await;

    match result.unwrap_err() {
        Error::Upstream { step, .. } => assert_eq!(step, Step::CreatingPlaylist),
        other => panic!("expected Upstream, got {other:?}"),
    }
    assert_eq!(calls, ["me", "create"]);
}

#[tokio::test]
async fn add_tracks_failure_leaves_the_playlist_behind() {
    let (result, calls) = run_orchestration("add").await;

    match result.unwrap_err() {
        Error::Upstream { step, .. } => assert_eq!(step, Step::AddingTracks),
        other => panic!("expected Upstream, got {other:?}"),
    }

    // The playlist was created but never populated; nothing rolls it back
    assert_eq!(calls, ["me", "create", "add"]);
}
