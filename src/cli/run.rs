//! Run coordinator
//!
//! Loads the rules once, filters stdin to end of stream, writes the filtered
//! report and prints the summary. Returns the process exit code.

use crate::cli::args::{Cli, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNINGS};
use crate::engine::LineClassifier;
use crate::error::FilterError;
use crate::output::summary::BANNER;
use crate::output::{RunSummary, write_retained};
use crate::rules::RuleSet;
use std::io::{BufRead, Write};
use std::path::Path;

/// Error type for a whole run
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("Failed to write summary: {0}")]
    Stdout(#[from] std::io::Error),

    #[error("Failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run the filter on the process's stdin and stdout
///
/// # Returns
///
/// Exit code:
/// - 0: at most one line retained
/// - 1: more than one line retained, or a fatal error
pub fn run_filter(cli: &Cli) -> i32 {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run_filter_with(&cli.rules, &cli.output, cli.format, stdin.lock(), &mut out) {
        Ok(summary) => {
            if summary.passed {
                EXIT_SUCCESS
            } else {
                EXIT_WARNINGS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Run the filter against explicit streams
///
/// # Errors
///
/// Any `FilterError` aborts the run before the output file is touched,
/// except for failures while writing it.
pub fn run_filter_with<R: BufRead, W: Write>(
    rules_path: &Path,
    output_path: &Path,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> Result<RunSummary, RunError> {
    match format {
        OutputFormat::Human => writeln!(out, "{}", BANNER)?,
        OutputFormat::Jsonl => log::info!("{}", BANNER),
    }

    let rules = RuleSet::load(rules_path)?;
    let classifier = LineClassifier::new(rules);
    let retained = classifier.filter(input)?;

    write_retained(output_path, &retained).map_err(FilterError::from)?;

    let summary = RunSummary::new(&retained, output_path);
    match format {
        OutputFormat::Human => writeln!(out, "{}", summary.human_line())?,
        OutputFormat::Jsonl => writeln!(out, "{}", summary.jsonl_line()?)?,
    }

    Ok(summary)
}
