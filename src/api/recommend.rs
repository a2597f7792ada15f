use axum::{Extension, Json};

use crate::{
    server::AppState,
    types::{RecommendRequest, RecommendResponse},
};

/// Returns an ordered track list for the given conversation history.
///
/// Delegates to the configured recommendation collaborator; the shipped
/// implementation is a fixed stub.
pub async fn recommend(
    Extension(app): Extension<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    let songs = app.recommender.recommend(&req.history);
    Json(RecommendResponse { songs })
}
