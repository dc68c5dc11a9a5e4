// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Procedural statements recognized in the PROCEDURE DIVISION
//!
//! Statements are flat: an `If` only carries its condition, the lines that
//! follow it in the source are separate statements.

use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").unwrap());

/// Closed set of statement kinds, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatementKind {
    Display,
    Move,
    Compute,
    Accept,
    If,
    StopRun,
    Unrecognized,
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatementKind::Display => "DISPLAY",
            StatementKind::Move => "MOVE",
            StatementKind::Compute => "COMPUTE",
            StatementKind::Accept => "ACCEPT",
            StatementKind::If => "IF",
            StatementKind::StopRun => "STOP RUN",
            StatementKind::Unrecognized => "unrecognized",
        };
        write!(f, "{name}")
    }
}

/// COBOL figurative constants with a direct Java counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figurative {
    /// `ZERO`, `ZEROS`, `ZEROES`
    Zero,
    /// `SPACE`, `SPACES`
    Space,
}

impl Figurative {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "ZERO" | "ZEROS" | "ZEROES" => Some(Figurative::Zero),
            "SPACE" | "SPACES" => Some(Figurative::Space),
            _ => None,
        }
    }
}

/// A value operand of DISPLAY or MOVE
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Quoted literal; holds the text between the quotes
    Text(String),
    /// Unquoted numeric literal, kept as written
    Number(String),
    Figurative(Figurative),
    /// Data item reference in source spelling
    Reference(String),
}

impl Operand {
    /// Classify one operand token.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.chars().next() {
            Some(quote @ ('\'' | '"')) => Operand::Text(unquote(token, quote)),
            _ if NUMERIC_LITERAL.is_match(token) => Operand::Number(token.to_string()),
            _ => match Figurative::parse(token) {
                Some(figurative) => Operand::Figurative(figurative),
                None => Operand::Reference(token.to_string()),
            },
        }
    }
}

/// Strip the surrounding quotes of a literal and collapse doubled quotes.
fn unquote(token: &str, quote: char) -> String {
    let inner = &token[quote.len_utf8()..];
    let inner = inner.strip_suffix(quote).unwrap_or(inner);
    let doubled = format!("{quote}{quote}");
    inner.replace(&doubled, &quote.to_string())
}

/// One classified procedural line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Display { operands: Vec<Operand> },
    Move { source: Operand, target: String },
    Compute { target: String, expression: String },
    Accept { target: String },
    If { condition: String },
    StopRun,
    /// Line matching no known shape, kept verbatim
    Unrecognized { line: String },
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Display { .. } => StatementKind::Display,
            Statement::Move { .. } => StatementKind::Move,
            Statement::Compute { .. } => StatementKind::Compute,
            Statement::Accept { .. } => StatementKind::Accept,
            Statement::If { .. } => StatementKind::If,
            Statement::StopRun => StatementKind::StopRun,
            Statement::Unrecognized { .. } => StatementKind::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_classification() {
        assert_eq!(Operand::parse("'HELLO'"), Operand::Text("HELLO".to_string()));
        assert_eq!(Operand::parse("\"A B\""), Operand::Text("A B".to_string()));
        assert_eq!(Operand::parse("42"), Operand::Number("42".to_string()));
        assert_eq!(Operand::parse("-1.50"), Operand::Number("-1.50".to_string()));
        assert_eq!(Operand::parse("spaces"), Operand::Figurative(Figurative::Space));
        assert_eq!(Operand::parse("ZEROES"), Operand::Figurative(Figurative::Zero));
        assert_eq!(Operand::parse("WS-NAME"), Operand::Reference("WS-NAME".to_string()));
    }

    #[test]
    fn test_unquote_edge_cases() {
        assert_eq!(Operand::parse("'UNTERMINATED"), Operand::Text("UNTERMINATED".to_string()));
        assert_eq!(Operand::parse("'IT''S'"), Operand::Text("IT'S".to_string()));
        assert_eq!(Operand::parse("'SAY \"HI\"'"), Operand::Text("SAY \"HI\"".to_string()));
        assert_eq!(Operand::parse("'"), Operand::Text(String::new()));
    }

    #[test]
    fn test_kind_order_is_priority_order() {
        assert!(StatementKind::Display < StatementKind::Move);
        assert!(StatementKind::StopRun < StatementKind::Unrecognized);
    }
}
