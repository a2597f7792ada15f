use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::spotify::Step;

/// Failure taxonomy for the service.
///
/// Every provider-facing failure is detected locally and converted into one
/// of these kinds; none are silently swallowed. The `Display` form carries
/// enough detail for operator logs, while `IntoResponse` keeps response
/// bodies low-detail so provider error payloads never reach end users.
#[derive(Debug)]
pub enum Error {
    /// The `state` returned by the provider does not match the session.
    StateMismatch,
    /// No access token in the session; the user must repeat `/authorize`.
    NotAuthenticated,
    /// The caller supplied an empty track list.
    EmptyTrackList,
    /// The token endpoint rejected the exchange (non-2xx or provider error).
    TokenExchange(String),
    /// The token endpoint answered 2xx but without a usable `access_token`.
    InvalidTokenResponse(String),
    /// Transport failure talking to the provider.
    Network(reqwest::Error),
    /// One of the sequential playlist-creation calls failed; `step` records
    /// which one, since there is no rollback of earlier steps.
    Upstream { step: Step, source: reqwest::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateMismatch => write!(f, "state mismatch"),
            Self::NotAuthenticated => write!(f, "not authenticated"),
            Self::EmptyTrackList => write!(f, "no songs provided"),
            Self::TokenExchange(detail) => write!(f, "token exchange failed: {detail}"),
            Self::InvalidTokenResponse(detail) => write!(f, "invalid token response: {detail}"),
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Upstream { step, source } => {
                write!(f, "upstream call failed while {step}: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) | Self::Upstream { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::StateMismatch => (StatusCode::BAD_REQUEST, "State mismatch").into_response(),
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Not authenticated"})),
            )
                .into_response(),
            Self::EmptyTrackList => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "No songs provided"})),
            )
                .into_response(),
            // Browser is mid-redirect on the callback; answer with a page,
            // the provider detail stays in the operator log.
            Self::TokenExchange(_) | Self::InvalidTokenResponse(_) | Self::Network(_) => {
                (StatusCode::BAD_GATEWAY, Html("<h4>Login failed.</h4>")).into_response()
            }
            Self::Upstream { .. } => (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "Upstream call failed"})),
            )
                .into_response(),
        }
    }
}
