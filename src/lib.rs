#![forbid(unsafe_code)]

//! lint-filter: suppress known-acceptable Verilator lint warnings
//!
//! Lint output is read line by line and tested against an ordered list of
//! regex ignore rules. Lines no rule explains are written to the filtered
//! report, and the run fails when more than the lint tool's summary line
//! survives.

pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{FileAccessError, FilterError, RuleError};

// Re-export core domain types for convenient access
pub use types::{RetainedLines, WIDTH_WARNING, WidthWarning};
