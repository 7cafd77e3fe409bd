use std::io::{self, Write};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{Res, types::Grouping};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Reads one trimmed line from stdin after printing `label: `.
pub fn prompt(label: &str) -> Res<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Appends every song sequence of `other` onto `target`, key by key.
/// Sequences under a shared artist key are concatenated in order; keys only
/// present in `other` are carried over unchanged. Nothing is deduplicated.
pub fn merge_groupings(target: &mut Grouping, other: Grouping) {
    for (artist, songs) in other {
        target.entry(artist).or_default().extend(songs);
    }
}

/// Catalog search query for a tagged song: title first, space-joined.
pub fn search_query(title: &str, artist: &str) -> String {
    format!("{} {}", title, artist)
}
