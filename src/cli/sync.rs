use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    library::walker,
    report,
    spotify::client::SpotifyClient,
    success,
    types::{Grouping, UnmatchedTableRow},
    utils,
};

/// The whole run, start to finish: resolve the root folder, walk it, report
/// the songs that found no match, then create the playlist and fill it with
/// the matched tracks artist by artist.
///
/// There is no rollback: if adding tracks fails after the playlist was
/// created, the playlist stays behind partially populated.
pub async fn sync(path: Option<PathBuf>, name: Option<String>) {
    let root = match path {
        Some(path) => path,
        None => match utils::prompt("Input path to folder with songs") {
            Ok(line) => PathBuf::from(line),
            Err(e) => error!("Failed to read folder path: {}", e),
        },
    };

    if !root.is_dir() {
        error!("{} is not a directory", root.display());
    }

    let mut client = match SpotifyClient::load().await {
        Ok(client) => client,
        Err(e) => {
            error!(
                "Failed to load token. Please run spotidir auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Scanning folder...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let (matched, unmatched) = match walker::scan(&root, &mut client, &pb).await {
        Ok(groupings) => groupings,
        Err(e) => {
            pb.finish_and_clear();
            error!("Scan failed: {}", e);
        }
    };

    pb.finish_and_clear();
    success!(
        "Processed {} songs: {} matched, {} unmatched.",
        song_count(&matched) + song_count(&unmatched),
        song_count(&matched),
        song_count(&unmatched)
    );

    if !unmatched.is_empty() {
        match report::write_unmatched(&unmatched).await {
            Ok(path) => info!(
                "Songs without a match were written to {} in the current directory.",
                path.display()
            ),
            Err(e) => error!("Failed to write report: {}", e),
        }

        println!("{}", Table::new(unmatched_rows(&unmatched)));
    }

    let playlist_name = match name {
        Some(name) => name,
        None => match utils::prompt("Input playlist name") {
            Ok(line) => line,
            Err(e) => error!("Failed to read playlist name: {}", e),
        },
    };

    let user_id = match client.current_user_id().await {
        Ok(id) => id,
        Err(e) => error!("Failed to fetch user profile: {}", e),
    };

    if let Err(e) = client.create_playlist(&user_id, &playlist_name).await {
        error!("Failed to create playlist: {}", e);
    }

    let playlist_id = match find_playlist_id(&mut client, &playlist_name).await {
        Some(id) => id,
        None => error!("Created playlist '{}' but could not find it again.", playlist_name),
    };

    for (artist, songs) in &matched {
        info!("Adding {} tracks to playlist...", artist);

        let ids: Vec<String> = songs
            .iter()
            .filter_map(|song| song.spotify_id.clone())
            .collect();

        // the add-items endpoint caps a single call at 100 tracks
        for chunk in ids.chunks(100) {
            if let Err(e) = client.add_items(&playlist_id, chunk).await {
                error!("Failed to add tracks for {}: {}", artist, e);
            }
        }
    }

    success!(
        "Added {} songs to playlist '{}'.",
        song_count(&matched),
        playlist_name
    );
}

/// Resolves a playlist id by re-listing the user's playlists and taking the
/// first exact name match.
async fn find_playlist_id(client: &mut SpotifyClient, name: &str) -> Option<String> {
    let playlists = match client.playlists().await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to list playlists: {}", e),
    };

    playlists
        .into_iter()
        .find(|playlist| playlist.name == name)
        .map(|playlist| playlist.id)
}

fn song_count(grouping: &Grouping) -> usize {
    grouping.values().map(|songs| songs.len()).sum()
}

fn unmatched_rows(unmatched: &Grouping) -> Vec<UnmatchedTableRow> {
    unmatched
        .iter()
        .flat_map(|(artist, songs)| {
            songs.iter().map(|song| UnmatchedTableRow {
                artist: artist.clone(),
                title: song
                    .title
                    .clone()
                    .unwrap_or_else(|| song.path_to_file.clone()),
                problems: song.problems.join(", "),
            })
        })
        .collect()
}
