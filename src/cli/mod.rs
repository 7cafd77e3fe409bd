//! # CLI Module
//!
//! User-facing commands. [`auth`] runs the Spotify OAuth PKCE flow and
//! caches the token; [`sync`] is the orchestrator for the actual work:
//!
//! 1. resolve the root folder (flag or stdin prompt)
//! 2. walk it, reading tags and searching the catalog per song
//! 3. write `not_found_songs.json` and print a summary table when anything
//!    went unmatched
//! 4. resolve the playlist name (flag or prompt), create the playlist, look
//!    its id up by name, and add the matched tracks artist by artist
//!
//! Per-song shortfalls are recorded on the songs themselves; anything else
//! (auth, API, filesystem) terminates the command through the `error!`
//! macro.

mod auth;
mod sync;

pub use auth::auth;
pub use sync::sync;
