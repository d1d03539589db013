//! Destination path generation from tag records
//!
//! Pure string transformation, no I/O. A [`TagRecord`] maps to a relative
//! `ARTIST/ALBUM/TRACKNUM_TITLE.mp3` path whose segments contain only
//! `[a-zA-Z0-9_]` after sanitization.
//!
//! The mapping is deterministic: two source files carrying identical tags
//! resolve to the same destination path, and the later one overwrites the
//! earlier. Conflict resolution is out of scope for this tool.

use crate::types::TagRecord;
use std::path::PathBuf;

/// Fallback segment values for absent or empty tag fields
const DEFAULT_ARTIST: &str = "Unknown";
const DEFAULT_ALBUM: &str = "Unknown_Album";
const DEFAULT_TITLE: &str = "Unknown_Track";
const DEFAULT_TRACK: &str = "0";

/// Extension appended to every generated path
const OUTPUT_EXT: &str = "mp3";

/// Compute the relative destination path for a tag record
///
/// Total over all inputs: missing fields use their defaults, and strings that
/// sanitize to nothing become empty segments rather than errors.
pub fn destination_rel_path(record: &TagRecord) -> PathBuf {
    let artist = sanitize_segment(resolve(record.artist.as_deref(), DEFAULT_ARTIST));
    let album = sanitize_segment(resolve(record.album.as_deref(), DEFAULT_ALBUM));
    let title = sanitize_segment(resolve(record.title.as_deref(), DEFAULT_TITLE));
    let track = match record.track {
        Some(n) => sanitize_segment(&n.to_string()),
        None => sanitize_segment(DEFAULT_TRACK),
    };

    let mut path = PathBuf::from(artist);
    path.push(album);
    path.push(format!("{}_{}.{}", track, title, OUTPUT_EXT));
    path
}

/// Pick the tag value when present and non-empty, else the default
fn resolve<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

/// Rewrite a tag value into a filesystem-safe path segment
///
/// Spaces and hyphens become underscores first, then every remaining character
/// outside `[a-zA-Z0-9_]` is dropped.
pub fn sanitize_segment(value: &str) -> String {
    value
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
