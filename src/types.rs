//! Core data types for podrescue
//!
//! These types represent the domain model and flow through the pipeline.

use std::fmt;

/// Tag fields read from a single audio file
///
/// Constructed fresh per source file by a [`crate::tags::TagReader`], read-only
/// afterwards. Absent fields stay `None`; defaults are applied at
/// path-generation time, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRecord {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,
    pub track: Option<u32>,
    /// Carried for completeness; not part of the destination path layout.
    pub year: Option<u32>,
}

/// File operation performed per recovered track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Duplicate the source file, leaving the original intact (default)
    Copy,
    /// Relocate the source file, removing the original
    Move,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Copy => write!(f, "copy"),
            Operation::Move => write!(f, "move"),
        }
    }
}

/// Counts reported at the end of a run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files copied or moved into the destination tree
    pub processed: usize,
    /// Files that failed the extension filter (or, in dry-run mode, all candidates)
    pub skipped: usize,
}
