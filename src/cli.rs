//! CLI argument parsing and the run coordinator

pub mod args;
pub mod common;
pub mod run;

// Re-export types for convenient access
pub use args::{Cli, OutputFormat};
