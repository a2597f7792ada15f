use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config::Config, error::Error, types::Token};

use super::REQUEST_TIMEOUT;

/// Builds the provider authorization URL for the browser redirect.
///
/// Carries the client identifier, a fixed `response_type=code`, the
/// registered redirect URI, the caller-supplied `state`, and the configured
/// scope string. All parameters are URL-encoded; the redirect URI in
/// particular contains characters that must not appear raw in a query
/// string.
///
/// No request is made here; the user's browser contacts the provider
/// directly.
///
/// # Example
///
/// ```
/// let url = build_authorize_url(&cfg, "Zx9k...");
/// // => "https://accounts.spotify.com/authorize?client_id=...&response_type=code&..."
/// ```
pub fn build_authorize_url(config: &Config, state: &str) -> String {
    let query = serde_urlencoded::to_string([
        ("client_id", config.client_id.as_str()),
        ("response_type", "code"),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("state", state),
        ("scope", config.scope.as_str()),
    ])
    .expect("query pairs of plain strings always encode");

    format!("{auth_url}?{query}", auth_url = &config.auth_url)
}

/// Exchanges an authorization code for an access token.
///
/// Issues a single form-encoded POST to the token endpoint with the
/// `authorization_code` grant type, the code, the registered redirect URI,
/// and the client credentials. This is the confidential-client variant of
/// the flow: the client secret travels in the form body, server to server,
/// and never reaches the browser.
///
/// # Returns
///
/// The full token-endpoint response is captured into a [`Token`] with the
/// obtained-at timestamp; only `access_token` is required to be present.
///
/// # Errors
///
/// - [`Error::Network`] - transport failure or timeout reaching the endpoint
/// - [`Error::TokenExchange`] - the endpoint answered non-2xx; the status
///   and response body are preserved for diagnostics
/// - [`Error::InvalidTokenResponse`] - a 2xx response without a usable
///   `access_token` field
///
/// No retry is attempted; authorization codes are single-use and the caller
/// restarts the flow instead.
pub async fn exchange_code(config: &Config, code: &str) -> Result<Token, Error> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .timeout(REQUEST_TIMEOUT)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(Error::TokenExchange(format!("{status}: {body}")));
    }

    let json: Value = res
        .json()
        .await
        .map_err(|e| Error::InvalidTokenResponse(e.to_string()))?;

    let access_token = match json["access_token"].as_str() {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => {
            return Err(Error::InvalidTokenResponse(
                "access_token missing from token response".to_string(),
            ));
        }
    };

    Ok(Token {
        access_token,
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
