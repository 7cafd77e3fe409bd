use std::path::Path;

use async_recursion::async_recursion;
use indicatif::ProgressBar;

use crate::{
    Res,
    library::tags,
    spotify::client::SpotifyClient,
    types::{Grouping, Song},
    utils,
};

/// Walks a directory tree depth-first and partitions every `.mp3` file found
/// into two artist-keyed groupings: songs matched to a catalog track and
/// songs that were not.
///
/// Subdirectory results are merged into the caller's groupings by ordered
/// per-key append. Entries that are neither directories nor `.mp3` files are
/// silently ignored. The progress handle is bumped once per processed song.
///
/// A failure to read a directory or a failed search call aborts the walk;
/// per-song tag and match shortfalls do not.
#[async_recursion]
pub async fn scan(
    path: &Path,
    client: &mut SpotifyClient,
    progress: &ProgressBar,
) -> Res<(Grouping, Grouping)> {
    let mut matched = Grouping::new();
    let mut unmatched = Grouping::new();

    for entry in path.read_dir()? {
        let entry = entry?;
        let entry_path = entry.path();

        if entry_path.is_dir() {
            let (sub_matched, sub_unmatched) = scan(&entry_path, client, progress).await?;
            utils::merge_groupings(&mut matched, sub_matched);
            utils::merge_groupings(&mut unmatched, sub_unmatched);
        } else if entry_path.extension().and_then(|ext| ext.to_str()) == Some("mp3") {
            let song = process_song(&entry_path, client).await?;

            progress.inc(1);
            progress.set_message(format!("Processed {} songs...", progress.position()));

            place_song(song, &mut matched, &mut unmatched);
        }
    }

    Ok((matched, unmatched))
}

/// Reads one file's tags and, when the tag read left no problems, looks the
/// song up in the catalog. An empty result list becomes a "Song not found"
/// problem; a search transport error is returned to the caller.
async fn process_song(path: &Path, client: &mut SpotifyClient) -> Res<Song> {
    let mut song = tags::read_song(path);
    if !song.problems.is_empty() {
        return Ok(song);
    }

    // a problem-free tag read guarantees both fields are present
    let query = utils::search_query(
        song.title.as_deref().unwrap_or_default(),
        song.artist.as_deref().unwrap_or_default(),
    );

    match client.search_track(&query, 1).await? {
        Some(id) => song.spotify_id = Some(id),
        None => song.problems.push("Song not found".to_string()),
    }

    Ok(song)
}

/// Files a song under its artist key in the matched or unmatched grouping.
pub fn place_song(song: Song, matched: &mut Grouping, unmatched: &mut Grouping) {
    let grouping = if song.is_matched() { matched } else { unmatched };
    grouping.entry(song.grouping_key()).or_default().push(song);
}
