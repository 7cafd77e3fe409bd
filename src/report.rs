use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{Res, types::Grouping};

/// Name of the unmatched-songs report, written to the working directory.
pub const REPORT_FILE_NAME: &str = "not_found_songs.json";

/// Renders a grouping as UTF-8 JSON with four-space indentation: one object
/// keyed by artist, each value an array of song objects carrying every song
/// field including the problems list.
pub fn render(grouping: &Grouping) -> Res<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    grouping.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Parses a report produced by [`render`] back into a grouping.
pub fn parse(content: &str) -> Res<Grouping> {
    Ok(serde_json::from_str(content)?)
}

/// Writes the grouping to [`REPORT_FILE_NAME`], silently replacing any
/// report left over from an earlier run. Returns the path written to.
pub async fn write_unmatched(grouping: &Grouping) -> Res<PathBuf> {
    let rendered = render(grouping)?;
    let path = PathBuf::from(REPORT_FILE_NAME);
    async_fs::write(&path, rendered).await?;
    Ok(path)
}
