use reqwest::Client;

use crate::{
    config,
    management::TokenManager,
    types::{
        AddTracksRequest, CreatePlaylistRequest, CurrentUserResponse, GetUserPlaylistsResponse,
        Playlist, SearchResponse,
    },
};

/// Authenticated handle on the Spotify Web API.
///
/// Constructed once per run from the persisted token and passed explicitly to
/// everything that needs the catalog; there is no process-global session. All
/// methods propagate HTTP and API errors to the caller unchanged, which makes
/// any such failure fatal to the run.
pub struct SpotifyClient {
    http: Client,
    tokens: TokenManager,
}

impl SpotifyClient {
    pub fn new(tokens: TokenManager) -> Self {
        SpotifyClient {
            http: Client::new(),
            tokens,
        }
    }

    /// Loads the cached token from disk and wraps it in a client handle.
    pub async fn load() -> Result<Self, String> {
        let tokens = TokenManager::load().await?;
        Ok(Self::new(tokens))
    }

    /// Searches the catalog for tracks and returns the top result's id, or
    /// `None` when the result list comes back empty.
    pub async fn search_track(
        &mut self,
        query: &str,
        limit: u32,
    ) -> Result<Option<String>, reqwest::Error> {
        let token = self.tokens.get_valid_token().await;
        let limit = limit.to_string();

        let response = self
            .http
            .get(format!("{}/search", config::SPOTIFY_API_URL))
            .query(&[("q", query), ("type", "track"), ("limit", &limit)])
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let res = response.json::<SearchResponse>().await?;
        Ok(res.tracks.items.first().map(|track| track.id.clone()))
    }

    /// Returns the authenticated user's id, the owner for created playlists.
    pub async fn current_user_id(&mut self) -> Result<String, reqwest::Error> {
        let token = self.tokens.get_valid_token().await;

        let response = self
            .http
            .get(format!("{}/me", config::SPOTIFY_API_URL))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let res = response.json::<CurrentUserResponse>().await?;
        Ok(res.id)
    }

    /// Lists the current user's playlists as ordered name/id pairs.
    pub async fn playlists(&mut self) -> Result<Vec<Playlist>, reqwest::Error> {
        let token = self.tokens.get_valid_token().await;

        let response = self
            .http
            .get(format!("{}/me/playlists", config::SPOTIFY_API_URL))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let res = response.json::<GetUserPlaylistsResponse>().await?;
        Ok(res.items)
    }

    /// Creates a private playlist owned by `user_id`. Duplicate names are not
    /// checked; the response body is not consumed.
    pub async fn create_playlist(
        &mut self,
        user_id: &str,
        name: &str,
    ) -> Result<(), reqwest::Error> {
        let token = self.tokens.get_valid_token().await;

        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: "Created by spotidir from a local music folder.".to_string(),
            public: false,
            collaborative: false,
        };

        self.http
            .post(format!(
                "{}/users/{}/playlists",
                config::SPOTIFY_API_URL,
                user_id
            ))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// Appends tracks to a playlist, one call per id batch handed in.
    pub async fn add_items(
        &mut self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<(), reqwest::Error> {
        let token = self.tokens.get_valid_token().await;

        let body = AddTracksRequest {
            uris: track_ids
                .iter()
                .map(|id| format!("spotify:track:{}", id))
                .collect(),
        };

        self.http
            .post(format!(
                "{}/playlists/{}/tracks",
                config::SPOTIFY_API_URL,
                playlist_id
            ))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
