// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Explanatory comments for generated Java source
//!
//! Inserts a banner before the field block, the entry point and the execute
//! method, and tags print and input-read lines with the COBOL statement they
//! came from. Only comments are added; code lines are never changed.

use crate::renderer::class_renderer::{EXECUTE_MARKER, FIELDS_MARKER, MAIN_MARKER};

const BANNER_RULE_WIDTH: usize = 50;

/// (marker, section name, COBOL equivalence)
const SECTIONS: &[(&str, &str, &str)] = &[
    (
        FIELDS_MARKER,
        "Variable declarations",
        "Java fields corresponding to COBOL DATA DIVISION items",
    ),
    (
        MAIN_MARKER,
        "Main method",
        "Entry point of the Java program, runs the COBOL program as a whole",
    ),
    (
        EXECUTE_MARKER,
        "Execute method",
        "Equivalent to COBOL's PROCEDURE DIVISION",
    ),
];

/// (line prefix, inline comment)
const INLINE_NOTES: &[(&str, &str)] = &[
    ("System.out.println(", "// Equivalent to COBOL DISPLAY statement"),
    ("java.util.Scanner scanner", "// Equivalent to COBOL ACCEPT statement"),
];

/// Add section banners and inline origin comments to `java`.
pub fn annotate(java: &str) -> String {
    let mut out: Vec<String> = vec![];
    let mut seen = [false; SECTIONS.len()];

    for line in java.split('\n') {
        let code = line.trim_start();
        let indent = &line[..line.len() - code.len()];

        for (index, (marker, name, equivalence)) in SECTIONS.iter().enumerate() {
            if !seen[index] && code.starts_with(marker) {
                seen[index] = true;
                out.extend(banner(indent, name, equivalence));
            }
        }

        match INLINE_NOTES.iter().find(|(prefix, _)| code.starts_with(prefix)) {
            Some((_, note)) => out.push(format!("{line}  {note}")),
            None => out.push(line.to_string()),
        }
    }
    out.join("\n")
}

fn banner(indent: &str, name: &str, equivalence: &str) -> Vec<String> {
    let rule = format!("{indent}// {}", "-".repeat(BANNER_RULE_WIDTH));
    vec![
        rule.clone(),
        format!("{indent}// {name}: {equivalence}"),
        rule,
    ]
}
