//! Runtime configuration settings

use crate::types::Operation;
use std::path::PathBuf;

/// Runtime settings for a recovery run
///
/// Built once from the CLI at startup, immutable for the run's duration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Source directory to scan
    pub source: PathBuf,
    /// Destination root for the rebuilt tree
    pub dest: PathBuf,
    /// Copy or move each recovered file
    pub operation: Operation,
    /// Plan only, no filesystem changes
    pub dry_run: bool,
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_cli(cli: &super::cli::Cli) -> Self {
        // Move wins when both mode flags are given
        let operation = if cli.move_files {
            Operation::Move
        } else {
            Operation::Copy
        };

        Self {
            source: cli.source.clone(),
            dest: cli.dest.clone(),
            operation,
            dry_run: cli.dry_run,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            dest: PathBuf::from("./recovered"),
            operation: Operation::Copy,
            dry_run: false,
        }
    }
}
