//! # API Module
//!
//! HTTP endpoint handlers for the service surface. The flow across them:
//!
//! 1. [`authorize`] issues a fresh anti-forgery state, binds it to the
//!    browser session, and redirects the user to the provider.
//! 2. [`callback`] receives the provider redirect, validates the state
//!    round-trip, exchanges the authorization code, and stores the access
//!    token in the session.
//! 3. [`recommend`] maps a conversation history to an ordered track list
//!    via the configured recommendation collaborator.
//! 4. [`create_playlist`] reads the session token and drives the
//!    three-step playlist creation against the provider.
//!
//! [`health`] reports liveness for monitoring.
//!
//! Handlers receive the shared [`crate::server::AppState`] through an axum
//! `Extension` layer and identify the browser session with an opaque
//! HttpOnly cookie. All failures map to HTTP responses through
//! [`crate::error::Error`].

mod authorize;
mod callback;
mod create_playlist;
mod health;
mod recommend;

pub use authorize::authorize;
pub use callback::callback;
pub use create_playlist::create_playlist;
pub use health::health;
pub use recommend::recommend;
