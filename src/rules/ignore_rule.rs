#![forbid(unsafe_code)]

//! Regex-based ignore rule
//!
//! An `IgnoreRule` is one line of the rules file compiled into a byte regex.
//! Evaluating it against a report line says whether it matched and, for
//! `%Warning-WIDTH` matches, whether the width comparison keeps the line.

use crate::error::RuleError;
use crate::types::{WIDTH_WARNING, WidthWarning};
use regex::bytes::{Captures, Regex, RegexBuilder};

const GROUP_ERROR_TYPE: usize = 1;
const GROUP_SIZE_A: usize = 2;
const GROUP_CONST: usize = 3;
const GROUP_EXPECTATION: usize = 4;
const GROUP_SIZE_B: usize = 5;

/// Result of testing one rule against one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The pattern was not found in the line
    NoMatch,
    /// The pattern matched without asking to keep the line
    Matched,
    /// The pattern matched a width warning that must stay in the report
    Retain,
}

impl RuleOutcome {
    pub fn is_match(self) -> bool {
        self != RuleOutcome::NoMatch
    }
}

/// A compiled pattern from the rules file
pub struct IgnoreRule {
    line: usize,
    pattern: Regex,
}

impl std::fmt::Debug for IgnoreRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IgnoreRule")
            .field("line", &self.line)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

impl IgnoreRule {
    /// Compile a pattern taken from `line` (1-indexed) of the rules file
    ///
    /// Patterns match byte-wise: `.` matches any byte but `\n`, and `\d`,
    /// `\w`, `\s` are ASCII classes.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if the pattern does not compile.
    pub fn new(line: usize, pattern: &str) -> Result<Self, RuleError> {
        let pattern = RegexBuilder::new(pattern)
            .unicode(false)
            .build()
            .map_err(|e| RuleError::InvalidRegex {
                line,
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        Ok(IgnoreRule { line, pattern })
    }

    /// Line number in the rules file this rule came from
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Search `subject` anywhere for this rule's pattern
    ///
    /// # Errors
    ///
    /// Fails when a match lacks the capture groups it is read through, or a
    /// width warning carries non-numeric sizes.
    pub fn evaluate(&self, subject: &[u8]) -> Result<RuleOutcome, RuleError> {
        let Some(caps) = self.pattern.captures(subject) else {
            return Ok(RuleOutcome::NoMatch);
        };

        self.require_group(GROUP_ERROR_TYPE)?;
        let is_width = caps
            .get(GROUP_ERROR_TYPE)
            .is_some_and(|m| m.as_bytes() == WIDTH_WARNING.as_bytes());
        if !is_width {
            return Ok(RuleOutcome::Matched);
        }

        let width = self.width_warning(&caps)?;
        log::trace!(
            "rule {} width warning: size_a={} size_b={} const={:?}",
            self.line,
            width.size_a,
            width.size_b,
            width.constant
        );
        if width.should_retain() {
            Ok(RuleOutcome::Retain)
        } else {
            Ok(RuleOutcome::Matched)
        }
    }

    fn width_warning(&self, caps: &Captures<'_>) -> Result<WidthWarning, RuleError> {
        let size_a = self.parse_width(caps, GROUP_SIZE_A)?;
        let size_b = self.parse_width(caps, GROUP_SIZE_B)?;
        let constant = caps
            .get(GROUP_CONST)
            .filter(|m| !m.as_bytes().is_empty())
            .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned());
        let expectation = caps
            .get(GROUP_EXPECTATION)
            .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned());

        Ok(WidthWarning {
            size_a,
            size_b,
            constant,
            expectation,
        })
    }

    fn parse_width(&self, caps: &Captures<'_>, group: usize) -> Result<i128, RuleError> {
        self.require_group(group)?;
        let bytes = caps.get(group).map(|m| m.as_bytes()).unwrap_or_default();
        std::str::from_utf8(bytes)
            .ok()
            .and_then(|text| text.trim().parse::<i128>().ok())
            .ok_or_else(|| RuleError::InvalidWidth {
                pattern: self.as_str().to_string(),
                group,
                text: String::from_utf8_lossy(bytes).into_owned(),
            })
    }

    fn require_group(&self, group: usize) -> Result<(), RuleError> {
        // captures_len counts the implicit whole-match group 0
        if self.pattern.captures_len() > group {
            Ok(())
        } else {
            Err(RuleError::MissingGroup {
                pattern: self.as_str().to_string(),
                group,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH_RULE: &str = r"(%Warning-WIDTH): .*?\((\d+)\).*?(const)?.*expect (\d+).*\((\d+)\)";

    #[test]
    fn test_new_invalid_regex() {
        let result = IgnoreRule::new(3, "[unclosed");
        match result {
            Err(RuleError::InvalidRegex { line, pattern, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(pattern, "[unclosed");
            }
            other => panic!("Expected InvalidRegex, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match() {
        let rule = IgnoreRule::new(1, r"(%Warning-UNUSED)").unwrap();
        let outcome = rule.evaluate(b"%Warning-WIDTH: foo").unwrap();
        assert_eq!(outcome, RuleOutcome::NoMatch);
        assert!(!outcome.is_match());
    }

    #[test]
    fn test_match_is_unanchored() {
        let rule = IgnoreRule::new(1, r"(%Warning-UNUSED)").unwrap();
        let outcome = rule
            .evaluate(b"prefix %Warning-UNUSED: Signal is not used")
            .unwrap();
        assert_eq!(outcome, RuleOutcome::Matched);
    }

    #[test]
    fn test_width_wider_a_is_retained() {
        let rule = IgnoreRule::new(1, WIDTH_RULE).unwrap();
        let line = b"%Warning-WIDTH: x.v:3: Operator ASSIGN (8) expect 4 bits (4)";
        assert_eq!(rule.evaluate(line).unwrap(), RuleOutcome::Retain);
    }

    #[test]
    fn test_width_equal_sizes_is_dropped() {
        let rule = IgnoreRule::new(1, WIDTH_RULE).unwrap();
        let line = b"%Warning-WIDTH: x.v:3: Operator ASSIGN (4) expect 4 bits (4)";
        assert_eq!(rule.evaluate(line).unwrap(), RuleOutcome::Matched);
    }

    #[test]
    fn test_width_narrower_a_is_dropped() {
        let rule = IgnoreRule::new(1, WIDTH_RULE).unwrap();
        let line = b"%Warning-WIDTH: x.v:3: Operator ASSIGN (2) expect 16 bits (16)";
        assert_eq!(rule.evaluate(line).unwrap(), RuleOutcome::Matched);
    }

    #[test]
    fn test_width_constant_is_retained() {
        let rule = IgnoreRule::new(
            1,
            r"(%Warning-WIDTH): .*?\((\d+)\) (const)? ?expect (\d+) \((\d+)\)",
        )
        .unwrap();
        let line = b"%Warning-WIDTH: x.v:3: ASSIGN (2) const expect 16 (16)";
        assert_eq!(rule.evaluate(line).unwrap(), RuleOutcome::Retain);
    }

    #[test]
    fn test_width_empty_constant_capture_is_absent() {
        let rule = IgnoreRule::new(
            1,
            r"(%Warning-WIDTH): \((\d+)\) (const|) ?expect (\d+) \((\d+)\)",
        )
        .unwrap();
        let line = b"%Warning-WIDTH: (2)  expect 16 (16)";
        assert_eq!(rule.evaluate(line).unwrap(), RuleOutcome::Matched);
    }

    #[test]
    fn test_other_error_type_only_matches() {
        let rule = IgnoreRule::new(1, r"(%Warning-[A-Z]+): .*\((\d+)\)").unwrap();
        let line = b"%Warning-CASEINCOMPLETE: y.v:9: Case values incomplete (8)";
        assert_eq!(rule.evaluate(line).unwrap(), RuleOutcome::Matched);
    }

    #[test]
    fn test_unset_error_type_group_only_matches() {
        let rule = IgnoreRule::new(1, r"(%Warning-WIDTH)?generated/").unwrap();
        let line = b"%Warning-PINMISSING: generated/top.v:1: Cell has missing pin";
        assert_eq!(rule.evaluate(line).unwrap(), RuleOutcome::Matched);
    }

    #[test]
    fn test_match_without_groups_is_error() {
        let rule = IgnoreRule::new(1, r"generated/").unwrap();
        let result = rule.evaluate(b"%Warning-UNUSED: generated/top.v:1");
        assert!(matches!(result, Err(RuleError::MissingGroup { group: 1, .. })));
    }

    #[test]
    fn test_width_match_without_size_groups_is_error() {
        let rule = IgnoreRule::new(1, r"(%Warning-WIDTH): \((\d+)\)").unwrap();
        let result = rule.evaluate(b"%Warning-WIDTH: (8)");
        assert!(matches!(result, Err(RuleError::MissingGroup { group: 5, .. })));
    }

    #[test]
    fn test_width_non_numeric_size_is_error() {
        let rule = IgnoreRule::new(
            1,
            r"(%Warning-WIDTH): \((\w+)\) (const)?expect (\w+) \((\w+)\)",
        )
        .unwrap();
        let result = rule.evaluate(b"%Warning-WIDTH: (eight) expect 4 (4)");
        match result {
            Err(RuleError::InvalidWidth { group, text, .. }) => {
                assert_eq!(group, 2);
                assert_eq!(text, "eight");
            }
            other => panic!("Expected InvalidWidth, got {:?}", other),
        }
    }

    #[test]
    fn test_width_beyond_64_bits() {
        let rule = IgnoreRule::new(1, WIDTH_RULE).unwrap();
        let line = b"%Warning-WIDTH: x.v:3: ASSIGN (100000000000000000000000) expect 4 bits (4)";
        assert_eq!(rule.evaluate(line).unwrap(), RuleOutcome::Retain);
    }

    #[test]
    fn test_digit_class_is_ascii_only() {
        let rule = IgnoreRule::new(1, r"(%Warning-WIDTH): \((\d+)\)()()\((\d+)\)").unwrap();
        let line = "%Warning-WIDTH: (\u{663})(4)".as_bytes();
        assert_eq!(rule.evaluate(line).unwrap(), RuleOutcome::NoMatch);
    }

    #[test]
    fn test_dot_matches_invalid_utf8() {
        let rule = IgnoreRule::new(1, r"(%Warning-UNUSED): .*generated/").unwrap();
        let line = b"%Warning-UNUSED: caf\xe9/generated/x.v:1: unused";
        assert_eq!(rule.evaluate(line).unwrap(), RuleOutcome::Matched);
    }

    #[test]
    fn test_debug_shows_pattern() {
        let rule = IgnoreRule::new(7, r"(%Warning-UNUSED)").unwrap();
        let debug = format!("{:?}", rule);
        assert!(debug.contains("%Warning-UNUSED"));
        assert!(debug.contains('7'));
    }
}
