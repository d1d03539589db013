//! Metadata extraction from audio file tags
//!
//! The [`TagReader`] trait is the seam between the pipeline and the tag
//! decoding backend, so the pipeline can be exercised without binary audio
//! fixtures. The production backend uses lofty to read ID3v2 and friends.

use crate::types::TagRecord;
use lofty::{Accessor, Probe, TaggedFileExt};
use std::path::Path;
use tracing::{debug, warn};

/// Tag decoding backend
pub trait TagReader {
    /// Read the tag fields of the file at `path`
    ///
    /// Returns whatever fields are available; a file with no readable tags
    /// yields the default (all-`None`) record.
    fn read_tags(&self, path: &Path) -> TagRecord;
}

/// Production tag reader backed by lofty
#[derive(Debug, Default)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_tags(&self, path: &Path) -> TagRecord {
        match read_tags_inner(path) {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to read tags from {}: {}", path.display(), e);
                TagRecord::default()
            }
        }
    }
}

fn read_tags_inner(path: &Path) -> Result<TagRecord, lofty::error::LoftyError> {
    let tagged_file = Probe::open(path)?.read()?;
    let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());

    let record = match tag {
        Some(tag) => TagRecord {
            artist: tag.artist().map(|s| s.to_string()),
            album: tag.album().map(|s| s.to_string()),
            title: tag.title().map(|s| s.to_string()),
            track: tag.track(),
            year: tag.year(),
        },
        None => {
            debug!("No tags found in {}", path.display());
            TagRecord::default()
        }
    };

    Ok(record)
}
