// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Source normalization
//!
//! Strips the trailing statement terminator from every line and re-indents
//! each line to a fixed four-space indent. Normalization is total: any text,
//! including the empty string, normalizes without error.

use once_cell::sync::Lazy;
use regex::Regex;

/// Indent every non-empty leading whitespace run is collapsed to.
pub const NORMALIZED_INDENT: &str = "    ";

static TERMINATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s*$").unwrap());
static LEADING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").unwrap());

/// One normalized source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Line text with terminator removed and indentation collapsed.
    pub text: String,
    /// Whether a trailing `.` terminator was stripped from this line.
    pub terminated: bool,
}

/// Normalize a single line.
pub fn normalize_line(line: &str) -> SourceLine {
    let terminated = TERMINATOR.is_match(line);
    let stripped = TERMINATOR.replace(line, "");
    let text = LEADING_WHITESPACE
        .replace(&stripped, NORMALIZED_INDENT)
        .into_owned();
    SourceLine { text, terminated }
}

/// Normalize every line of `source`, preserving line count.
pub fn normalize_lines(source: &str) -> Vec<SourceLine> {
    if source.is_empty() {
        return vec![];
    }
    source.split('\n').map(normalize_line).collect()
}

/// Join normalized lines back into a single text.
pub fn join_lines(lines: &[SourceLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize a complete source text.
pub fn normalize(source: &str) -> String {
    join_lines(&normalize_lines(source))
}
