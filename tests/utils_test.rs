use spotidir::types::{Grouping, Song};
use spotidir::utils::*;

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

fn grouping_of(entries: Vec<(&str, Vec<Song>)>) -> Grouping {
    entries
        .into_iter()
        .map(|(artist, songs)| (artist.to_string(), songs))
        .collect()
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should be deterministic - same input produces same output
    assert!(!challenge.is_empty());
    assert_eq!(challenge, generate_code_challenge(verifier));

    // Different input should produce different output
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_merge_groupings_appends_shared_keys_in_order() {
    let s1 = create_test_song("/music/one.mp3", Some("A"), Some("One"));
    let s2 = create_test_song("/music/two.mp3", Some("A"), Some("Two"));
    let s3 = create_test_song("/music/three.mp3", Some("B"), Some("Three"));

    let mut target = grouping_of(vec![("A", vec![s1.clone()])]);
    let other = grouping_of(vec![("A", vec![s2.clone()]), ("B", vec![s3.clone()])]);

    merge_groupings(&mut target, other);

    // Shared key: sequences concatenated, order preserved, no deduplication
    assert_eq!(target["A"], vec![s1, s2]);

    // Key only present on one side is carried over unchanged
    assert_eq!(target["B"], vec![s3]);
    assert_eq!(target.len(), 2);
}

#[test]
fn test_merge_groupings_into_empty_target() {
    let s1 = create_test_song("/music/one.mp3", Some("A"), Some("One"));

    let mut target = Grouping::new();
    merge_groupings(&mut target, grouping_of(vec![("A", vec![s1.clone()])]));

    assert_eq!(target["A"], vec![s1]);
}

#[test]
fn test_merge_groupings_keeps_case_variants_distinct() {
    // Artist keys are not normalized: case variants form separate groups
    let s1 = create_test_song("/music/one.mp3", Some("muse"), Some("One"));
    let s2 = create_test_song("/music/two.mp3", Some("Muse"), Some("Two"));

    let mut target = grouping_of(vec![("muse", vec![s1])]);
    merge_groupings(&mut target, grouping_of(vec![("Muse", vec![s2])]));

    assert_eq!(target.len(), 2);
}

#[test]
fn test_search_query_is_title_first_space_joined() {
    assert_eq!(search_query("Karma Police", "Radiohead"), "Karma Police Radiohead");
}

#[test]
fn test_song_grouping_key() {
    let tagged = create_test_song("/music/one.mp3", Some("Muse"), Some("One"));
    assert_eq!(tagged.grouping_key(), "Muse");

    // Songs without a readable artist share the empty-string group
    let untagged = create_test_song("/music/two.mp3", None, None);
    assert_eq!(untagged.grouping_key(), "");
}

#[test]
fn test_song_is_matched() {
    let mut song = create_test_song("/music/one.mp3", Some("Muse"), Some("One"));
    assert!(!song.is_matched());

    song.spotify_id = Some("4uLU6hMCjMI75M1A2tKUQC".to_string());
    assert!(song.is_matched());
}
