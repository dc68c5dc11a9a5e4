// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Static optimization tips for generated Java source
//!
//! Each rule is an independent check over the source text. Triggered tips come
//! first in rule order, followed by the standing tips.

use once_cell::sync::Lazy;
use regex::Regex;

static STRING_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"private\s+String\s+[A-Za-z_$][A-Za-z0-9_$]*").unwrap());

struct Rule {
    applies: fn(&str) -> bool,
    tip: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        applies: |java| java.contains("System.out.println"),
        tip: "Consider using a logging framework like SLF4J instead of System.out.println for better control over logging",
    },
    Rule {
        applies: |java| java.contains("catch (Exception "),
        tip: "Use specific exception types instead of catching generic Exception",
    },
    Rule {
        applies: |java| java.contains("java.util.Scanner"),
        tip: "Close Scanner resources using try-with-resources to prevent resource leaks",
    },
    Rule {
        applies: |java| STRING_FIELD.is_match(java),
        tip: "Use StringBuilder for string concatenation operations within loops for better performance",
    },
];

const STANDING_TIPS: &[&str] = &[
    "Consider adding JavaDoc comments to methods for better code documentation",
    "Use Java's enhanced for loop syntax for any list iterations",
    "Apply consistent indentation and code formatting for better readability",
];

/// Tips for `java`, triggered rules first, then the standing tips.
pub fn suggest_optimizations(java: &str) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(java))
        .map(|rule| rule.tip)
        .chain(STANDING_TIPS.iter().copied())
        .map(str::to_string)
        .collect()
}
