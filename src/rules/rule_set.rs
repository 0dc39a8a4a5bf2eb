#![forbid(unsafe_code)]

//! Ordered set of ignore rules loaded from the rules file

use crate::error::{FileAccessError, FilterError, RuleError};
use crate::rules::IgnoreRule;
use std::path::Path;

/// Default rules file, resolved against the working directory
pub const DEFAULT_RULES_FILE: &str = "ignore_rules.regex";

/// The ignore rules, in file order
///
/// Loaded once per run and never mutated afterwards.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<IgnoreRule>,
}

impl RuleSet {
    /// Load and compile every pattern in the rules file at `path`
    ///
    /// # Errors
    ///
    /// Returns `FilterError::FileAccess` if the file cannot be read and
    /// `FilterError::Rule` if any pattern fails to compile.
    pub fn load(path: &Path) -> Result<Self, FilterError> {
        let content = std::fs::read_to_string(path).map_err(|e| FileAccessError::new(path, e))?;
        let rules = Self::parse(&content)?;
        log::debug!("Loaded {} ignore rules from {}", rules.len(), path.display());
        Ok(rules)
    }

    /// Compile rules from rules-file text, one pattern per line
    ///
    /// Trailing whitespace is stripped from each line and lines left empty
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` naming the first bad line.
    pub fn parse(content: &str) -> Result<Self, RuleError> {
        let mut rules = Vec::new();

        for (index, raw) in content.split('\n').enumerate() {
            let pattern = trim_pattern(raw);
            if pattern.is_empty() {
                continue;
            }
            rules.push(IgnoreRule::new(index + 1, pattern)?);
        }

        Ok(RuleSet { rules })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IgnoreRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a IgnoreRule;
    type IntoIter = std::slice::Iter<'a, IgnoreRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn trim_pattern(raw: &str) -> &str {
    let stripped = crate::types::strip_trailing_whitespace(raw.as_bytes());
    // Only ASCII bytes were removed, so the cut is on a char boundary
    &raw[..stripped.len()]
}
