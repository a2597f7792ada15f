//! Recspot Service Library
//!
//! This library implements a small web service that bridges a chat-style
//! recommendation source and the Spotify Web API: it walks a user through the
//! OAuth 2.0 authorization-code flow, keeps the resulting access token in a
//! per-browser session, and creates playlists from recommended track URIs on
//! the user's behalf.
//!
//! # Modules
//!
//! - `api` - HTTP endpoint handlers for the service surface
//! - `config` - Configuration from environment variables and `.env`
//! - `error` - Error taxonomy and HTTP response mapping
//! - `recommend` - Recommendation collaborator seam and the built-in stub
//! - `server` - Router assembly and the HTTP server
//! - `session` - Per-browser session store (authorization state, token)
//! - `spotify` - Spotify Web API client (auth, user, playlists)
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use recspot::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> recspot::Res<()> {
//!     config::load_env();
//!     let cfg = config::Config::from_env()?;
//!     server::start_api_server(server::AppState::new(cfg)).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod recommend;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// cross async boundaries throughout the application.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for unrecoverable startup failures; request handlers report
/// problems through `crate::error::Error` instead of terminating the process.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
