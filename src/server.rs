use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    api,
    config::Config,
    recommend::{Recommender, StaticRecommender},
    session::SessionStore,
};

/// Shared state handed to every handler: resolved configuration, the
/// per-browser session store, and the recommendation collaborator.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
    pub recommender: Arc<dyn Recommender>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
            sessions: SessionStore::new(),
            recommender: Arc::new(StaticRecommender),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/recommend", post(api::recommend))
        .route("/authorize", get(api::authorize))
        .route("/callback", get(api::callback))
        .route("/create_playlist", post(api::create_playlist))
        .layer(Extension(state))
}

pub async fn start_api_server(state: AppState) {
    let addr = match SocketAddr::from_str(&state.config.server_addr) {
        Ok(addr) => addr,
        Err(e) => crate::error!("Failed to parse server address: {}", e),
    };

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
