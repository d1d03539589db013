//! Source tree scanning and the extension filter

use crate::error::{PodrescueError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// File extensions this tool will pick up, lowercase
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3"];

/// Result of scanning a source tree
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Files that passed the extension filter, in traversal order
    pub files: Vec<PathBuf>,
    /// Files that did not
    pub skipped: usize,
}

/// Recursively enumerate candidate audio files under `source`
///
/// Directories are visited in traversal order; files within a directory come
/// in whatever order the filesystem yields them. Walk errors (unreadable
/// directories, permission denial) are fatal.
pub fn scan(source: &Path) -> Result<ScanOutcome> {
    if !source.is_dir() {
        return Err(PodrescueError::SourceNotFound(source.to_path_buf()));
    }

    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| PodrescueError::WalkError {
            path: source.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            info!("Processing {}", path.display());
        } else if entry.file_type().is_file() {
            if has_supported_extension(path) {
                debug!("Discovered: {}", path.display());
                outcome.files.push(path.to_path_buf());
            } else {
                outcome.skipped += 1;
            }
        }
    }

    info!("Discovered {} audio files", outcome.files.len());

    if outcome.files.is_empty() {
        warn!("No supported audio files found in {}", source.display());
    }

    Ok(outcome)
}

/// Check whether a file name carries a dotted extension from the allow-list
///
/// Matching is case-insensitive; files without an extension never qualify.
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
}
