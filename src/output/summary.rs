#![forbid(unsafe_code)]

//! Run summary formatting (human and JSONL)

use crate::types::RetainedLines;
use serde::Serialize;
use std::path::Path;

/// Printed before any input is read
pub const BANNER: &str = "Processing lint output";

/// Outcome of one filter run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Lines written to the output file, duplicates included
    pub retained: usize,

    /// `retained - 1`; the lint tool's trailing summary line is not a warning
    pub warnings: i64,

    /// Filtered report location
    pub output: String,

    /// False when unsuppressed warnings remain
    pub passed: bool,
}

impl RunSummary {
    pub fn new(retained: &RetainedLines, output: &Path) -> Self {
        RunSummary {
            retained: retained.len(),
            warnings: retained.warning_count(),
            output: output.display().to_string(),
            passed: !retained.has_warnings(),
        }
    }

    /// The final human-readable count line
    pub fn human_line(&self) -> String {
        format!("Warning from non-generated sources: {}", self.warnings)
    }

    /// One JSON object on a single line
    pub fn jsonl_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
