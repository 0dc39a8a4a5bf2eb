#![forbid(unsafe_code)]

//! Writes retained lines to the filtered lint report

use crate::error::FileAccessError;
use crate::types::RetainedLines;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default filtered report, resolved against the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "verilator.lint";

/// Write `retained` to `path`, truncating any previous report
///
/// Lines are written verbatim in order, duplicates included.
///
/// # Errors
///
/// Returns `FileAccessError` if the file cannot be created or written.
pub fn write_retained(path: &Path, retained: &RetainedLines) -> Result<(), FileAccessError> {
    let file = File::create(path).map_err(|e| FileAccessError::new(path, e))?;
    let mut writer = BufWriter::new(file);

    for line in retained.iter() {
        writer
            .write_all(line)
            .map_err(|e| FileAccessError::new(path, e))?;
    }
    writer.flush().map_err(|e| FileAccessError::new(path, e))?;

    log::debug!("Wrote {} lines to {}", retained.len(), path.display());
    Ok(())
}
