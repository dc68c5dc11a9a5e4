// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Extraction of the translation unit from normalized COBOL text
//!
//! Each extractor degrades to an empty or default value when the division it
//! reads from is missing.

use once_cell::sync::Lazy;
use regex::Regex;

pub mod identity;
pub mod statements;
pub mod variables;

pub use identity::extract_identity;
pub use statements::{classify_line, classify_procedures, matching_kinds};
pub use variables::extract_variables;

pub(crate) static DATA_DIVISION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)DATA\s+DIVISION").unwrap());
pub(crate) static PROCEDURE_DIVISION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)PROCEDURE\s+DIVISION").unwrap());
pub(crate) static END_PROGRAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)END\s+PROGRAM").unwrap());

/// Text after the first `start` marker up to the next `end` marker, or to the
/// end of `text` when there is no closing marker.
pub(crate) fn region<'t>(text: &'t str, start: &Regex, end: &Regex) -> Option<&'t str> {
    let from = start.find(text)?.end();
    let rest = &text[from..];
    let to = end.find(rest).map_or(rest.len(), |m| m.start());
    Some(&rest[..to])
}
