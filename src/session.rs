//! Per-browser session storage.
//!
//! Each browser session is identified by an opaque cookie value and owns at
//! most an authorization `state` (between `/authorize` and `/callback`) and
//! an access token (after a successful exchange). Sessions for different
//! cookies never contend; concurrent requests on the same session race with
//! last-write-wins semantics, which is acceptable for a user driving two
//! login attempts at once.

use std::{collections::HashMap, sync::Arc};

use rand::{Rng, distr::Alphanumeric};
use tokio::sync::Mutex;

use crate::types::{SessionData, Token};

/// Name of the cookie carrying the session identifier.
pub const SESSION_COOKIE: &str = "recspot_session";

/// Generates an opaque session identifier.
pub fn generate_session_id() -> String {
    random_alphanumeric(32)
}

/// Generates an unpredictable authorization state value.
///
/// 32 alphanumeric characters give just under 200 bits of entropy, well
/// above the 128 bits the state parameter needs to be unguessable.
pub fn generate_state() -> String {
    random_alphanumeric(32)
}

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Keyed store mapping a session identifier to its `SessionData`.
///
/// Cloning is cheap; all clones share the same underlying map. Entries are
/// created implicitly on first write and live for the process lifetime,
/// mirroring what a cookie-session transport provides.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, SessionData>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fresh authorization state, overwriting any prior value for
    /// the session.
    pub async fn put_state(&self, session_id: &str, state: String) {
        let mut sessions = self.inner.lock().await;
        sessions.entry(session_id.to_string()).or_default().state = Some(state);
    }

    /// Returns the stored authorization state without consuming it.
    pub async fn state(&self, session_id: &str) -> Option<String> {
        let sessions = self.inner.lock().await;
        sessions.get(session_id).and_then(|s| s.state.clone())
    }

    /// Removes and returns the stored authorization state.
    ///
    /// Used once the callback has been accepted, so the same state value
    /// cannot be replayed against a later callback.
    pub async fn take_state(&self, session_id: &str) -> Option<String> {
        let mut sessions = self.inner.lock().await;
        sessions.get_mut(session_id).and_then(|s| s.state.take())
    }

    /// Stores the access token obtained for this session.
    pub async fn put_token(&self, session_id: &str, token: Token) {
        let mut sessions = self.inner.lock().await;
        sessions.entry(session_id.to_string()).or_default().token = Some(token);
    }

    /// Returns the session's access token, if the user has authenticated.
    pub async fn token(&self, session_id: &str) -> Option<Token> {
        let sessions = self.inner.lock().await;
        sessions.get(session_id).and_then(|s| s.token.clone())
    }

    /// Drops a session and everything it holds.
    pub async fn clear(&self, session_id: &str) {
        let mut sessions = self.inner.lock().await;
        sessions.remove(session_id);
    }
}
