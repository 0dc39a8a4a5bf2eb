//! Error types for the lint filter
//!
//! Every error here is fatal: the filter either classifies the whole input
//! stream and writes the full output, or aborts.

use std::path::PathBuf;

/// A file the filter depends on could not be read or written
#[derive(Debug, thiserror::Error)]
#[error("Cannot access {}: {source}", .path.display())]
pub struct FileAccessError {
    /// Path of the rules file or output file
    pub path: PathBuf,

    /// Underlying I/O failure
    #[source]
    pub source: std::io::Error,
}

impl FileAccessError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileAccessError {
            path: path.into(),
            source,
        }
    }
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Pattern in the rules file failed to compile
    #[error("Invalid regex pattern on line {line} '{pattern}': {message}")]
    InvalidRegex {
        line: usize,
        pattern: String,
        message: String,
    },

    /// A rule matched but lacks a capture group the classifier reads
    #[error("Pattern '{pattern}' has no capture group {group}")]
    MissingGroup { pattern: String, group: usize },

    /// A width capture is not a base-10 integer
    #[error("Pattern '{pattern}' captured non-numeric width '{text}' in group {group}")]
    InvalidWidth {
        pattern: String,
        group: usize,
        text: String,
    },
}

/// Top-level error type for a filter run
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Rules file or output file error
    #[error(transparent)]
    FileAccess(#[from] FileAccessError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Reading the lint report failed
    #[error("Failed to read input: {0}")]
    Input(#[source] std::io::Error),
}
