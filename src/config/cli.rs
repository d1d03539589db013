//! CLI argument parsing and configuration

use clap::Parser;
use std::path::PathBuf;

/// podrescue - rebuild a music directory structure from embedded tags
///
/// Scans a source directory for audio files, reads their tags, and recreates
/// them under the destination as ARTIST/ALBUM/TRACKNUM_TITLE.mp3. Useful for
/// recovering a collection (e.g. off an iPod) whose folder layout is gone but
/// whose tags survive.
#[derive(Parser, Debug)]
#[command(name = "podrescue")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source music directory to scan
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination directory for the rebuilt tree
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,

    /// Keep old files (copy; the default when no mode flag is given)
    #[arg(short, long, default_value = "false")]
    pub copy: bool,

    /// Delete old files (move; wins when both mode flags are given)
    #[arg(short = 'm', long = "move", default_value = "false")]
    pub move_files: bool,

    /// Show the transfer plan without touching the filesystem
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
