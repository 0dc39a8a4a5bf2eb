//! Test utilities for lint-filter integration tests

#![allow(dead_code)]

use std::fs;
use tempfile::TempDir;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Width rule in the layout the classifier reads:
/// 1 = error type, 2 = size_a, 3 = const, 4 = expectation, 5 = size_b
pub const WIDTH_RULE: &str =
    r"(%Warning-WIDTH): .*?\((\d+)\) ?(const)? ?expect (\d+).*\((\d+)\)";

/// Suppresses unused-signal warnings from generated sources
pub const GENERATED_RULE: &str = r"(%Warning-UNUSED): generated/";

/// Create a temporary working directory holding `ignore_rules.regex`
pub fn workspace_with_rules(rules: &[&str]) -> TestResult<TempDir> {
    let temp_dir = TempDir::new()?;
    let mut content = rules.join("\n");
    content.push('\n');
    fs::write(temp_dir.path().join("ignore_rules.regex"), content)?;
    Ok(temp_dir)
}
