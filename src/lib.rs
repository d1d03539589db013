//! podrescue - Tag-Driven Music Tree Recovery
//!
//! A command-line utility that scans a directory tree for audio files, reads
//! their embedded tags, and rebuilds them into an ARTIST/ALBUM/TRACKNUM_TITLE
//! hierarchy under a destination root, copying or moving each file.
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - `config`: CLI argument parsing and runtime settings
//! - `discovery`: source tree scanning and the extension filter
//! - `tags`: tag reading (with a swappable backend trait)
//! - `naming`: pure tag-record to destination-path mapping
//! - `pipeline`: sequential copy/move orchestration
//!
//! # Example
//!
//! ```no_run
//! use podrescue::{config::Settings, pipeline, tags::LoftyTagReader};
//!
//! let settings = Settings::default();
//! let summary = pipeline::run(&settings, &LoftyTagReader).expect("Recovery failed");
//! println!("Processed {} tracks", summary.processed);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod tags;
pub mod types;

// Re-export key types at crate root
pub use error::{PodrescueError, Result};
pub use types::{Operation, RunSummary, TagRecord};
