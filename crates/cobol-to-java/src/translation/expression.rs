// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Expression and condition rewriting
//!
//! Identifiers are name-mapped, quoted literals become Java string literals,
//! and everything else (numbers, operators, spacing) is kept as written.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::data::naming::map_name;
use crate::data::Operand;
use crate::renderer::escape::java_string_literal;

/// A quoted literal, or a name containing at least one letter.
static EXPRESSION_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"'(?:[^']|'')*'?|"(?:[^"]|"")*"?|[A-Za-z0-9_]*[A-Za-z][A-Za-z0-9_]*(?:-[A-Za-z0-9_]+)*"#,
    )
    .unwrap()
});

/// A Java string literal, or one of the comparison phrases. Applied after
/// name mapping, so the phrases are already lower case.
static COMPARISON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#""(?:[^"\\]|\\.)*"|\bnot\s+equals?(?:\s+to)?\b|\bequals?(?:\s+to)?\b|\bgreater\s+than\b|\bless\s+than\b"#,
    )
    .unwrap()
});

/// Name-map every identifier in `expression`, leaving operators untouched.
pub fn map_identifiers(expression: &str) -> String {
    EXPRESSION_TOKEN
        .replace_all(expression, |caps: &Captures<'_>| {
            let token = &caps[0];
            match Operand::parse(token) {
                Operand::Text(text) => java_string_literal(&text),
                _ => map_name(token),
            }
        })
        .into_owned()
}

/// Rewrite a COBOL condition into a Java boolean expression.
pub fn rewrite_condition(condition: &str) -> String {
    let mapped = map_identifiers(condition);
    COMPARISON
        .replace_all(&mapped, |caps: &Captures<'_>| {
            let phrase = &caps[0];
            let replacement = if phrase.starts_with('"') {
                phrase
            } else if phrase.starts_with("not") {
                "!="
            } else if phrase.starts_with("equal") {
                "=="
            } else if phrase.starts_with("greater") {
                ">"
            } else {
                "<"
            };
            replacement.to_string()
        })
        .into_owned()
}
