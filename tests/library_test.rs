use std::fs;
use std::path::PathBuf;

use spotidir::library::{tags, walker};
use spotidir::management::TokenManager;
use spotidir::report;
use spotidir::spotify::client::SpotifyClient;
use spotidir::types::{Grouping, Song, Token};

// Helper function to create a test song
fn create_test_song(path: &str, artist: Option<&str>, title: Option<&str>) -> Song {
    Song {
        path_to_file: path.to_string(),
        artist: artist.map(|a| a.to_string()),
        title: title.map(|t| t.to_string()),
        spotify_id: None,
        problems: Vec::new(),
    }
}

// Fresh scratch directory under the system temp dir
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("spotidir_{}_{}", name, std::process::id()));
    if dir.exists() {
        let _ = fs::remove_dir_all(&dir);
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

// Client over a dummy token; tests never let it reach the network
fn offline_client() -> SpotifyClient {
    SpotifyClient::new(TokenManager::new(Token {
        access_token: "test-access-token".to_string(),
        refresh_token: "test-refresh-token".to_string(),
        scope: "playlist-read-private playlist-modify-private".to_string(),
        expires_in: 3600,
        obtained_at: chrono::Utc::now().timestamp() as u64,
    }))
}

#[test]
fn test_read_song_records_load_failure() {
    let dir = scratch_dir("tags_garbage");
    let path = dir.join("broken.mp3");
    fs::write(&path, b"this is not an mpeg stream").unwrap();

    let song = tags::read_song(&path);

    assert_eq!(song.path_to_file, path.to_string_lossy());
    assert_eq!(song.artist, None);
    assert_eq!(song.title, None);
    assert_eq!(song.spotify_id, None);
    assert_eq!(song.problems, vec!["Failed to process file".to_string()]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_place_song_partitions_by_match() {
    let mut matched = Grouping::new();
    let mut unmatched = Grouping::new();

    let mut hit = create_test_song("/music/hit.mp3", Some("Muse"), Some("Uprising"));
    hit.spotify_id = Some("4uLU6hMCjMI75M1A2tKUQC".to_string());

    let mut miss = create_test_song("/music/miss.mp3", Some("Muse"), Some("Obscure"));
    miss.problems.push("Song not found".to_string());

    walker::place_song(hit.clone(), &mut matched, &mut unmatched);
    walker::place_song(miss.clone(), &mut matched, &mut unmatched);

    assert_eq!(matched["Muse"], vec![hit]);
    assert_eq!(unmatched["Muse"], vec![miss]);
}

#[tokio::test]
async fn test_scan_collects_unreadable_songs_without_searching() {
    let root = scratch_dir("scan_tree");
    let sub = root.join("album");
    fs::create_dir_all(&sub).unwrap();

    // Neither file parses as audio, so the walk never touches the catalog
    fs::write(root.join("one.mp3"), b"garbage").unwrap();
    fs::write(sub.join("two.mp3"), b"garbage").unwrap();

    // Ignored: not a directory, not an .mp3
    fs::write(sub.join("notes.txt"), b"liner notes").unwrap();

    let mut client = offline_client();
    let progress = indicatif::ProgressBar::hidden();

    let (matched, unmatched) = walker::scan(&root, &mut client, &progress)
        .await
        .unwrap();

    assert!(matched.is_empty());

    // Both songs lack a readable artist and share the empty-string group,
    // merged up from the subdirectory into the root grouping
    assert_eq!(unmatched.len(), 1);
    assert_eq!(unmatched[""].len(), 2);
    for song in &unmatched[""] {
        assert_eq!(song.problems, vec!["Failed to process file".to_string()]);
        assert!(song.spotify_id.is_none());
    }

    assert_eq!(progress.position(), 2);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_report_round_trip_preserves_all_fields() {
    let mut not_found = create_test_song("/music/miss.mp3", Some("Muse"), Some("Obscure"));
    not_found.problems.push("Song not found".to_string());

    let mut untagged = create_test_song("/music/raw.mp3", None, None);
    untagged.problems.push("Tag is undefined".to_string());

    let mut grouping = Grouping::new();
    grouping.insert("Muse".to_string(), vec![not_found]);
    grouping.insert("".to_string(), vec![untagged]);

    let rendered = report::render(&grouping).unwrap();
    let parsed = report::parse(&rendered).unwrap();

    assert_eq!(parsed, grouping);
}

#[test]
fn test_report_render_shape() {
    let mut song = create_test_song("/music/miss.mp3", Some("Muse"), Some("Obscure"));
    song.problems.push("Song not found".to_string());

    let mut grouping = Grouping::new();
    grouping.insert("Muse".to_string(), vec![song]);

    let rendered = report::render(&grouping).unwrap();

    // One object keyed by artist, four-space indentation, full song fields
    assert!(rendered.starts_with("{"));
    assert!(rendered.contains("    \"Muse\": ["));
    assert!(rendered.contains("\"path_to_file\": \"/music/miss.mp3\""));
    assert!(rendered.contains("\"artist\": \"Muse\""));
    assert!(rendered.contains("\"title\": \"Obscure\""));
    assert!(rendered.contains("\"spotify_id\": null"));
    assert!(rendered.contains("\"Song not found\""));
}
