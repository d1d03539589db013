//! Unified error types for podrescue
//!
//! Error strategy:
//! - Unreadable tags: not an error; the file is filed under default segments
//! - Filesystem errors (walk, create, copy, move): fatal, abort the run
//!
//! Files already transferred before a fatal error keep their post-operation
//! state; there is no rollback.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for podrescue operations
#[derive(Debug, Error)]
pub enum PodrescueError {
    #[error("Source directory not found: '{0}'\n  Tip: Check the path exists and is accessible")]
    SourceNotFound(PathBuf),

    #[error("Cannot read source tree at '{path}': {source}")]
    WalkError {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("Cannot write to destination '{path}': {source}\n  Tip: Check write permissions for the destination directory")]
    DestError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for podrescue operations
pub type Result<T> = std::result::Result<T, PodrescueError>;
