#![forbid(unsafe_code)]

//! Line classifier
//!
//! Every rule is tested against every line; there is no first-match
//! short-circuit. A line that matches no rule is kept once. A line that
//! matches is kept once for each `%Warning-WIDTH` rule whose width check
//! asks to keep it, and dropped otherwise.

use crate::error::{FilterError, RuleError};
use crate::rules::{RuleOutcome, RuleSet};
use crate::types::{RetainedLines, strip_trailing_whitespace};
use std::io::BufRead;

/// Decision for a single report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// At least one rule matched the line
    pub matched_any: bool,

    /// How many times the line is written to the output
    pub copies: usize,
}

/// Applies a loaded rule set to report lines
#[derive(Debug)]
pub struct LineClassifier {
    rules: RuleSet,
}

impl LineClassifier {
    pub fn new(rules: RuleSet) -> Self {
        LineClassifier { rules }
    }

    /// Classify one line, terminator included or not
    ///
    /// # Errors
    ///
    /// Propagates the first `RuleError` raised by a matching rule.
    pub fn classify(&self, line: &[u8]) -> Result<Classification, RuleError> {
        let subject = strip_trailing_whitespace(line);
        let mut matched_any = false;
        let mut copies = 0;

        for rule in &self.rules {
            let outcome = rule.evaluate(subject)?;
            if outcome.is_match() {
                log::trace!("line matched rule {}: {:?}", rule.line(), outcome);
                matched_any = true;
            }
            if outcome == RuleOutcome::Retain {
                copies += 1;
            }
        }

        if !matched_any {
            copies = 1;
        }

        Ok(Classification {
            matched_any,
            copies,
        })
    }

    /// Read `input` to the end and collect the retained lines
    ///
    /// Lines are kept byte-for-byte with their original terminators.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Input` on a read failure and `FilterError::Rule`
    /// when classification fails. No partial result is returned.
    pub fn filter<R: BufRead>(&self, mut input: R) -> Result<RetainedLines, FilterError> {
        let mut retained = RetainedLines::new();
        let mut line = Vec::new();
        let mut lines_read = 0usize;

        loop {
            line.clear();
            let read = input
                .read_until(b'\n', &mut line)
                .map_err(FilterError::Input)?;
            if read == 0 {
                break;
            }
            lines_read += 1;

            let classification = self.classify(&line)?;
            retained.push_copies(&line, classification.copies);
        }

        log::debug!("Classified {} lines, retained {}", lines_read, retained.len());
        Ok(retained)
    }
}
