use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// One processed local audio file: its extracted tag data, the Spotify track
/// it was matched to (if any), and every problem recorded along the way.
///
/// A song counts as matched when `spotify_id` is set; anything else ends up
/// in the unmatched grouping and, eventually, the report file. The serde
/// field names are the report file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub path_to_file: String,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub spotify_id: Option<String>,
    pub problems: Vec<String>,
}

impl Song {
    pub fn new(path_to_file: String) -> Self {
        Song {
            path_to_file,
            artist: None,
            title: None,
            spotify_id: None,
            problems: Vec::new(),
        }
    }

    pub fn is_matched(&self) -> bool {
        self.spotify_id.is_some()
    }

    /// Artist key the song is grouped under. Songs without a readable artist
    /// share the empty-string group. Keys are deliberately not normalized:
    /// case or whitespace variants of the same artist form distinct groups.
    pub fn grouping_key(&self) -> String {
        self.artist.clone().unwrap_or_default()
    }
}

/// Artist name mapped to the ordered songs collected under it. Used for both
/// the matched and the unmatched set; iteration order is the key order.
pub type Grouping = BTreeMap<String, Vec<Song>>;

#[derive(Tabled)]
pub struct UnmatchedTableRow {
    pub artist: String,
    pub title: String,
    pub problems: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}
