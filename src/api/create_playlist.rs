use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    error::Error,
    server::AppState,
    session, spotify,
    types::{PlaylistCreated, PlaylistRequest},
    warning,
};

/// Display name given to every playlist this service creates.
const PLAYLIST_NAME: &str = "ChatGPT Recommendations";

/// Creates a playlist from the submitted track URIs.
///
/// Requires an authenticated session (a token stored by a prior successful
/// `/callback`) and a non-empty track list; both checks happen before any
/// upstream call. Each invocation creates a new playlist, so repeating a
/// request makes a second, identical one.
pub async fn create_playlist(
    Extension(app): Extension<AppState>,
    jar: CookieJar,
    Json(req): Json<PlaylistRequest>,
) -> Result<Json<PlaylistCreated>, Error> {
    let token = match jar.get(session::SESSION_COOKIE) {
        Some(cookie) => app.sessions.token(cookie.value()).await,
        None => None,
    };
    let Some(token) = token else {
        return Err(Error::NotAuthenticated);
    };

    if req.songs.is_empty() {
        return Err(Error::EmptyTrackList);
    }

    match spotify::playlist::create_and_populate(
        &app.config,
        &token.access_token,
        req.songs,
        PLAYLIST_NAME,
    )
    .await
    {
        Ok(playlist_id) => Ok(Json(PlaylistCreated { playlist_id })),
        Err(e) => {
            warning!("Playlist creation failed: {}", e);
            Err(e)
        }
    }
}
