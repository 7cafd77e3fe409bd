//! # Spotify Integration Module
//!
//! Everything that talks to Spotify lives here. Two concerns:
//!
//! - [`auth`] implements the OAuth 2.0 PKCE flow: verifier/challenge
//!   generation, the browser hand-off, the local callback wait, the
//!   code-for-token exchange, and token persistence.
//! - [`client`] wraps the authenticated Web API session as an explicitly
//!   constructed [`client::SpotifyClient`] handle exposing the five calls the
//!   tool needs: track search, the current user's profile, the user's
//!   playlists, playlist creation, and adding tracks to a playlist.
//!
//! There is deliberately no retry or backoff in the client: per-song search
//! misses surface as problems on the song, and every other API failure is
//! fatal to the run.

pub mod auth;
pub mod client;
