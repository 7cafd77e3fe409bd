use std::path::Path;

use lofty::prelude::*;
use lofty::probe::Probe;

use crate::types::Song;

/// Reads the embedded metadata of one audio file into a [`Song`].
///
/// Every shortfall is recorded as a problem string on the song instead of an
/// error: a file that cannot be parsed at all gets "Failed to process file"
/// and nothing further is read; a parsed file without any tag gets
/// "Tag is undefined"; a tag missing the artist or title gets the matching
/// "... is undefined" entry while the present fields are still copied over.
pub fn read_song(path: &Path) -> Song {
    let mut song = Song::new(path.to_string_lossy().into_owned());

    let tagged_file = match Probe::open(path).and_then(|probe| probe.read()) {
        Ok(file) => file,
        Err(_) => {
            song.problems.push("Failed to process file".to_string());
            return song;
        }
    };

    let tag = match tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
        Some(tag) => tag,
        None => {
            song.problems.push("Tag is undefined".to_string());
            return song;
        }
    };

    match tag.artist() {
        Some(artist) => song.artist = Some(artist.to_string()),
        None => song.problems.push("Artist is undefined".to_string()),
    }

    match tag.title() {
        Some(title) => song.title = Some(title.to_string()),
        None => song.problems.push("Title is undefined".to_string()),
    }

    song
}
