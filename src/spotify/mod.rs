//! # Spotify Integration Module
//!
//! Client layer for every call the service makes against Spotify. Each
//! submodule covers one API domain:
//!
//! - [`auth`] - Authorization URL construction and the authorization-code
//!   token exchange against the accounts service
//! - [`user`] - Current-user profile lookup
//! - [`playlist`] - Playlist creation, track addition, and the sequential
//!   create-and-populate orchestration
//!
//! All requests are plain `reqwest` calls with a bearer token where the API
//! requires one, typed `serde` request/response bodies, and a bounded
//! per-request timeout. There is no retry logic: every failure is terminal
//! for the request that triggered it and is reported through
//! [`crate::error::Error`].

pub mod auth;
pub mod playlist;
pub mod user;

use std::{fmt, time::Duration};

/// Upper bound for every outbound call to the provider. A hung upstream
/// surfaces as a network error instead of stalling the handler forever.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Progress marker for the playlist-creation sequence.
///
/// The three upstream calls run strictly in this order with no rollback, so
/// a failure's `Step` tells an operator exactly what state the user's
/// account was left in: nothing yet, an empty playlist, or a playlist that
/// may be partially populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ResolvingUser,
    CreatingPlaylist,
    AddingTracks,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolvingUser => write!(f, "resolving user"),
            Self::CreatingPlaylist => write!(f, "creating playlist"),
            Self::AddingTracks => write!(f, "adding tracks"),
        }
    }
}
