//! Local music library scanning.
//!
//! [`tags`] extracts artist/title metadata from a single file; [`walker`]
//! drives the recursive directory walk, sends cleanly tagged songs through
//! the catalog search, and partitions everything into matched and unmatched
//! groupings keyed by artist.

pub mod tags;
pub mod walker;
