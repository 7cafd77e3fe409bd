use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{config, types::Token};

/// Refresh responses carry a fresh access token; Spotify may or may not
/// rotate the refresh token alongside it.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
    refresh_token: Option<String>,
    scope: Option<String>,
    expires_in: u64,
}

/// Owns the persisted OAuth token and keeps it usable: loads it from the
/// cache directory, refreshes it shortly before expiry, and writes updates
/// back to disk.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Returns an access token that is valid right now, refreshing and
    /// re-persisting it first if the cached one is about to expire.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            if let Ok(new_token) = self.refresh().await {
                self.token = new_token;
                let _ = self.persist().await;
            }
        }

        self.token.access_token.clone()
    }

    // Treat the token as expired four minutes early so in-flight requests
    // never race the actual expiry.
    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in - 240
    }

    async fn refresh(&self) -> Result<Token, String> {
        let client = Client::new();
        let res = client
            .post(config::SPOTIFY_TOKEN_URL)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", &self.token.refresh_token),
                ("client_id", &config::spotify_client_id()),
                ("client_secret", &config::spotify_client_secret()),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let refreshed: RefreshResponse = res.json().await.map_err(|e| e.to_string())?;

        Ok(Token {
            access_token: refreshed.access_token,
            refresh_token: refreshed
                .refresh_token
                .unwrap_or_else(|| self.token.refresh_token.clone()),
            scope: refreshed.scope.unwrap_or_else(|| self.token.scope.clone()),
            expires_in: refreshed.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotidir/cache/token.json");
        path
    }
}
