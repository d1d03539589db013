//! Recovery run orchestration

pub mod runner;

pub use runner::run;
