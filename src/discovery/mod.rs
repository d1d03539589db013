//! File discovery and scanning

pub mod scanner;

pub use scanner::{scan, ScanOutcome, SUPPORTED_EXTENSIONS};
