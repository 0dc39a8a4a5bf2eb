#![forbid(unsafe_code)]

//! Core domain types for the lint filter

/// Message category whose lines are kept or dropped by comparing widths
pub const WIDTH_WARNING: &str = "%Warning-WIDTH";

/// Strips trailing whitespace the way lint report lines are normalized for matching
///
/// Removes space, tab, newline, carriage return, vertical tab and form feed.
pub fn strip_trailing_whitespace(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| !is_trailing_space(*b))
        .map_or(0, |i| i + 1);
    &bytes[..end]
}

fn is_trailing_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Captures pulled from a line that matched a `%Warning-WIDTH` rule
///
/// Group layout: 1 = error type, 2 = `size_a`, 3 = constant marker,
/// 4 = expectation, 5 = `size_b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthWarning {
    pub size_a: i128,
    pub size_b: i128,

    /// Constant operand marker; `None` when the group is absent or empty
    pub constant: Option<String>,

    /// Carried for parity with the capture layout; never consulted
    pub expectation: Option<String>,
}

impl WidthWarning {
    /// Whether the line stays in the report
    ///
    /// A constant operand always keeps the line. Otherwise the line is kept
    /// only when `size_a` is strictly wider than `size_b`.
    pub fn should_retain(&self) -> bool {
        self.constant.is_some() || self.size_a > self.size_b
    }
}

/// Lines chosen to survive filtering, in input order
///
/// A line retained by several rules appears once per retaining rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetainedLines {
    lines: Vec<Vec<u8>>,
}

impl RetainedLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `copies` copies of `line`
    pub fn push_copies(&mut self, line: &[u8], copies: usize) {
        for _ in 0..copies {
            self.lines.push(line.to_vec());
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Warnings excluding the lint tool's summary line
    ///
    /// Always `len() - 1`, so an empty report yields -1.
    pub fn warning_count(&self) -> i64 {
        self.lines.len() as i64 - 1
    }

    /// True when more than the summary line survived
    pub fn has_warnings(&self) -> bool {
        self.lines.len() > 1
    }
}
