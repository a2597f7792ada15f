use axum::{Extension, extract::Query, response::Html};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{error::Error, server::AppState, session, spotify, success, warning};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Completes the authorization-code flow.
///
/// The returned `state` must match the one stored for this browser session
/// byte for byte; anything else (no cookie, no pending state, wrong value)
/// is rejected before the token exchange is ever attempted. On a match the
/// state is consumed, the code is exchanged, and the resulting token is
/// bound to the session. The browser is mid-redirect with no programmatic
/// listener, so success answers with a human-readable page.
pub async fn callback(
    Extension(app): Extension<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<Html<&'static str>, Error> {
    let Some(session_id) = jar
        .get(session::SESSION_COOKIE)
        .map(|c| c.value().to_string())
    else {
        return Err(Error::StateMismatch);
    };

    let stored = app.sessions.state(&session_id).await;
    match (&params.state, &stored) {
        (Some(returned), Some(expected)) if returned == expected => {}
        _ => return Err(Error::StateMismatch),
    }

    // State is single-use; drop it before talking to the provider.
    app.sessions.take_state(&session_id).await;

    if let Some(denial) = params.error {
        warning!("Provider denied authorization: {}", denial);
        return Err(Error::TokenExchange(format!(
            "provider returned error: {denial}"
        )));
    }

    let Some(code) = params.code else {
        return Err(Error::TokenExchange(
            "callback carried no authorization code".to_string(),
        ));
    };

    match spotify::auth::exchange_code(&app.config, &code).await {
        Ok(token) => {
            app.sessions.put_token(&session_id, token).await;
            success!("Authentication successful; token bound to session.");
            Ok(Html(
                "<h2>Authentication successful.</h2><p>You may close this window.</p>",
            ))
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Err(e)
        }
    }
}
