//! Recovery runner
//!
//! Sequential orchestration: scan the source tree, then for each candidate
//! file read its tags, compute the destination path, and copy or move it into
//! place. One file is fully processed before the next begins; the run aborts
//! on the first filesystem error and already-transferred files stay put.

use crate::config::Settings;
use crate::discovery;
use crate::error::{PodrescueError, Result};
use crate::naming;
use crate::tags::TagReader;
use crate::types::{Operation, RunSummary};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Run a full recovery pass over the configured source tree
pub fn run<R: TagReader>(settings: &Settings, reader: &R) -> Result<RunSummary> {
    info!("Scanning for audio files...");
    let outcome = discovery::scan(&settings.source)?;

    if settings.dry_run {
        return run_dry_run(&outcome, settings, reader);
    }

    let mut summary = RunSummary {
        processed: 0,
        skipped: outcome.skipped,
    };

    for source_file in &outcome.files {
        let record = reader.read_tags(source_file);
        let rel_path = naming::destination_rel_path(&record);
        let dest_file = settings.dest.join(&rel_path);

        info!(
            "{}: {} -> {}",
            settings.operation,
            file_name(source_file),
            rel_path.display()
        );

        if let Some(parent) = dest_file.parent() {
            fs::create_dir_all(parent).map_err(|e| PodrescueError::DestError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        transfer(source_file, &dest_file, settings.operation)?;
        summary.processed += 1;
    }

    Ok(summary)
}

/// Perform the configured file operation
///
/// A colliding destination is overwritten; two source files with identical
/// tags resolve to the same path and the later one wins.
fn transfer(source: &Path, dest: &Path, operation: Operation) -> Result<()> {
    match operation {
        Operation::Copy => {
            fs::copy(source, dest).map_err(|e| PodrescueError::DestError {
                path: dest.to_path_buf(),
                source: e,
            })?;
        }
        Operation::Move => {
            // rename fails across filesystems; fall back to copy + remove
            if fs::rename(source, dest).is_err() {
                debug!(
                    "rename failed for {}, falling back to copy + remove",
                    source.display()
                );
                fs::copy(source, dest).map_err(|e| PodrescueError::DestError {
                    path: dest.to_path_buf(),
                    source: e,
                })?;
                fs::remove_file(source)?;
            }
        }
    }
    Ok(())
}

/// Dry run mode - print the transfer plan without touching the filesystem
fn run_dry_run<R: TagReader>(
    outcome: &discovery::ScanOutcome,
    settings: &Settings,
    reader: &R,
) -> Result<RunSummary> {
    println!();
    println!("=== DRY RUN MODE ===");
    println!();

    for source_file in &outcome.files {
        let record = reader.read_tags(source_file);
        let rel_path = naming::destination_rel_path(&record);
        println!(
            "{}: {} -> {}",
            settings.operation,
            source_file.display(),
            settings.dest.join(&rel_path).display()
        );
    }

    println!();
    println!("Would {} {} files", settings.operation, outcome.files.len());

    Ok(RunSummary {
        processed: 0,
        skipped: outcome.files.len() + outcome.skipped,
    })
}

fn file_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}
