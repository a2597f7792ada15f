use axum::{Extension, response::Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::{server::AppState, session, spotify};

/// Starts the authorization-code flow.
///
/// Generates a fresh state value, stores it in the browser's session
/// (creating the session and its cookie on first contact, overwriting any
/// prior state otherwise), and redirects the browser to the provider's
/// authorization endpoint. No outbound call happens here.
pub async fn authorize(
    Extension(app): Extension<AppState>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let session_id = match jar.get(session::SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => session::generate_session_id(),
    };

    let auth_state = session::generate_state();
    app.sessions.put_state(&session_id, auth_state.clone()).await;

    let url = spotify::auth::build_authorize_url(&app.config, &auth_state);

    let jar = jar.add(
        Cookie::build((session::SESSION_COOKIE, session_id))
            .path("/")
            .http_only(true),
    );

    (jar, Redirect::temporary(&url))
}
