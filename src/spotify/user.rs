use reqwest::Client;

use crate::{config::Config, types::CurrentUserResponse};

use super::REQUEST_TIMEOUT;

/// Resolves the authenticated user's profile from the `/me` endpoint.
///
/// The playlist-creation endpoint is addressed per user, so the user id has
/// to be looked up with the bearer token before a playlist can be created.
///
/// # Errors
///
/// Returns `reqwest::Error` for transport failures, non-2xx statuses, and
/// malformed response bodies; the caller tags the failure with its step.
pub async fn current_user(
    config: &Config,
    token: &str,
) -> Result<CurrentUserResponse, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config.api_url);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .timeout(REQUEST_TIMEOUT)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CurrentUserResponse>().await
}
