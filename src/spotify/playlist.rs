use reqwest::Client;

use crate::{
    config::Config,
    error::Error,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse,
    },
};

use super::{REQUEST_TIMEOUT, Step, user};

/// Creates a private playlist for the given user.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `user_id` - Owner of the new playlist, as returned by the `/me` lookup
/// * `name` - Display name of the playlist
///
/// # Returns
///
/// The created playlist; only the `id` is used downstream.
pub async fn create(
    config: &Config,
    token: &str,
    user_id: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!("{uri}/users/{user_id}/playlists", uri = &config.api_url);

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        public: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .timeout(REQUEST_TIMEOUT)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Appends the given track URIs to a playlist, preserving their order.
pub async fn add_tracks(
    config: &Config,
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<AddTrackToPlaylistResponse, reqwest::Error> {
    let api_url = format!("{uri}/playlists/{playlist_id}/tracks", uri = &config.api_url);

    let body = AddTrackToPlaylistRequest { uris };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .timeout(REQUEST_TIMEOUT)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTrackToPlaylistResponse>().await
}

/// Creates a playlist and populates it with the given tracks.
///
/// Runs the three-step sequence `ResolvingUser` → `CreatingPlaylist` →
/// `AddingTracks` strictly in order. The first failing step aborts the
/// sequence and is reported as [`Error::Upstream`] tagged with that step;
/// earlier steps are not compensated, so a failure at `AddingTracks` leaves
/// an empty playlist behind.
///
/// Two calls with the same track list create two distinct playlists; the
/// provider has no idempotency key for playlist creation.
///
/// # Arguments
///
/// * `token` - Valid, non-expired access token
/// * `tracks` - Non-empty, ordered list of track URIs
/// * `name` - Display name for the created playlist
///
/// # Returns
///
/// The id of the created playlist.
pub async fn create_and_populate(
    config: &Config,
    token: &str,
    tracks: Vec<String>,
    name: &str,
) -> Result<String, Error> {
    if tracks.is_empty() {
        return Err(Error::EmptyTrackList);
    }

    let user = user::current_user(config, token)
        .await
        .map_err(|source| Error::Upstream {
            step: Step::ResolvingUser,
            source,
        })?;

    let playlist = create(config, token, &user.id, name)
        .await
        .map_err(|source| Error::Upstream {
            step: Step::CreatingPlaylist,
            source,
        })?;

    add_tracks(config, token, &playlist.id, tracks)
        .await
        .map_err(|source| Error::Upstream {
            step: Step::AddingTracks,
            source,
        })?;

    Ok(playlist.id)
}
