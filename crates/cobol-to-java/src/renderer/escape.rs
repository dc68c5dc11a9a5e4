// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Escaping for Java string literals

/// Render `text` as a double-quoted Java string literal.
pub fn java_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
