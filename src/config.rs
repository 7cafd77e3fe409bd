//! Configuration management for the folder-to-playlist CLI.
//!
//! Credentials come from environment variables, optionally loaded from a
//! `.env` file in the platform-specific local data directory. Everything
//! that is not a credential (API endpoints, the authorization scope) is a
//! fixed constant: the tool always talks to the public Spotify Web API and
//! always requests private-playlist read/modify access.

use dotenv;
use std::{env, path::PathBuf};

/// Base URL of the Spotify Web API.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Spotify OAuth authorization endpoint.
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";

/// Spotify OAuth token exchange endpoint.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// The fixed authorization scope: reading and modifying private playlists.
pub const SPOTIFY_SCOPE: &str = "playlist-read-private playlist-modify-private";

/// Fallback bind address for the local OAuth callback server.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for `<data dir>/spotidir/.env` (e.g. `~/.local/share/spotidir/.env`
/// on Linux), creating the directory if needed. Variables already present in
/// the process environment take precedence over file values.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotidir/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // A missing file is fine; the variables may come from the environment.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the Spotify API client ID.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI registered for the application.
///
/// # Panics
///
/// Panics if the `SPOTIFY_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").expect("SPOTIFY_REDIRECT_URI must be set")
}

/// Returns the bind address for the local OAuth callback server.
///
/// Reads `SERVER_ADDRESS`, falling back to [`DEFAULT_SERVER_ADDRESS`]. The
/// address must match the host and port of the registered redirect URI.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}
