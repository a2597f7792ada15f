//! Configuration management for the recommendation-to-playlist service.
//!
//! Configuration is sourced from the process environment, optionally seeded
//! from a `.env` file in the working directory. The three provider
//! credentials are mandatory and validated once at startup; endpoint URLs
//! and the listen address fall back to sensible defaults so a deployment
//! only has to provide what is actually secret.

use std::env;

/// Default Spotify authorization endpoint (browser redirect target).
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
/// Default Spotify token endpoint (server-to-server code exchange).
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
/// Default Spotify Web API base URL.
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
/// Default listen address for the HTTP server.
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8020";
/// Default OAuth scope set; playlist write access, private and public.
const DEFAULT_SCOPE: &str = "playlist-modify-private playlist-modify-public";

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing file is not an error; real deployments typically configure the
/// process environment directly.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Runtime configuration, loaded once at startup and shared behind the
/// application state.
///
/// Keeping the resolved values in a struct rather than reading the
/// environment per request means misconfiguration aborts the process before
/// it ever binds a socket, and tests can point the Spotify client at local
/// stub servers.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth client identifier registered with the provider.
    pub client_id: String,
    /// OAuth client secret registered with the provider.
    pub client_secret: String,
    /// Redirect URI; must exactly match the value registered with the provider.
    pub redirect_uri: String,
    /// Authorization endpoint the user's browser is redirected to.
    pub auth_url: String,
    /// Token endpoint used for the authorization-code exchange.
    pub token_url: String,
    /// Web API base URL for user and playlist operations.
    pub api_url: String,
    /// Address the HTTP server binds to.
    pub server_addr: String,
    /// Scope string requested during authorization.
    pub scope: String,
}

impl Config {
    /// Builds a `Config` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing required variable
    /// (`CLIENT_ID`, `CLIENT_SECRET`, `REDIRECT_URI`). Optional values fall
    /// back to their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use recspot::config;
    ///
    /// config::load_env();
    /// let cfg = config::Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            client_id: require("CLIENT_ID")?,
            client_secret: require("CLIENT_SECRET")?,
            redirect_uri: require("REDIRECT_URI")?,
            auth_url: optional("AUTH_URL", DEFAULT_AUTH_URL),
            token_url: optional("TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: optional("API_URL", DEFAULT_API_URL),
            server_addr: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            scope: optional("SCOPE", DEFAULT_SCOPE),
        })
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}

fn optional(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
