//! Output file writer and run summary

pub mod summary;
pub mod writer;

pub use summary::RunSummary;
pub use writer::{DEFAULT_OUTPUT_FILE, write_retained};
