// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Statement classification for the PROCEDURE DIVISION
//!
//! Every non-blank line of the procedure region is matched against a fixed,
//! ordered pattern table; the first pattern that matches decides the kind and
//! lines matching nothing become `Statement::Unrecognized`. Paragraph and
//! section headers are dropped, so the result is a single flat sequence.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::data::{Operand, Statement, StatementKind};
use crate::extraction::{END_PROGRAM, PROCEDURE_DIVISION};
use crate::normalize::SourceLine;

/// One entry of the classification table.
struct StatementPattern {
    kind: StatementKind,
    regex: Regex,
    build: fn(&Captures<'_>) -> Statement,
}

impl StatementPattern {
    fn new(kind: StatementKind, pattern: &str, build: fn(&Captures<'_>) -> Statement) -> Self {
        Self {
            kind,
            regex: Regex::new(&format!("(?i){pattern}")).unwrap(),
            build,
        }
    }
}

/// Classification table in priority order.
static STATEMENT_PATTERNS: Lazy<Vec<StatementPattern>> = Lazy::new(|| {
    vec![
        StatementPattern::new(StatementKind::Display, r"^DISPLAY(?:\s+(.*))?$", |caps| {
            Statement::Display {
                operands: split_operands(caps.get(1).map_or("", |m| m.as_str()))
                    .iter()
                    .map(|token| Operand::parse(token))
                    .collect(),
            }
        }),
        StatementPattern::new(
            StatementKind::Move,
            r#"^MOVE\s+('(?:[^']|'')*'|"(?:[^"]|"")*"|.+?)\s+TO\s+(.+)$"#,
            |caps| {
                Statement::Move {
                    source: Operand::parse(&caps[1]),
                    target: caps[2].trim().to_string(),
                }
            },
        ),
        StatementPattern::new(StatementKind::Compute, r"^COMPUTE\s+(.+?)\s*=\s*(.*)$", |caps| {
            Statement::Compute {
                target: caps[1].trim().to_string(),
                expression: caps[2].trim().to_string(),
            }
        }),
        StatementPattern::new(StatementKind::Accept, r"^ACCEPT\s+(.+)$", |caps| {
            Statement::Accept {
                target: caps[1].trim().to_string(),
            }
        }),
        StatementPattern::new(StatementKind::If, r"^IF\s+(.+)$", |caps| Statement::If {
            condition: caps[1].trim().to_string(),
        }),
        StatementPattern::new(StatementKind::StopRun, r"^STOP\s+RUN$", |_| Statement::StopRun),
    ]
});

static PARAGRAPH_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([A-Za-z0-9][A-Za-z0-9-]*)(?:\s+SECTION)?$").unwrap());

/// Single-word statements that look like paragraph labels but are not.
const NEVER_LABELS: &[&str] = &[
    "CONTINUE", "ELSE", "END-COMPUTE", "END-EVALUATE", "END-IF", "END-PERFORM", "END-READ",
    "END-SEARCH", "EXIT", "GOBACK", "NEXT",
];

/// Classify every statement of the PROCEDURE DIVISION, in source order.
pub fn classify_procedures(lines: &[SourceLine]) -> Vec<Statement> {
    let statements: Vec<_> = procedure_region(lines)
        .into_iter()
        .filter_map(|(text, terminated)| {
            let text = text.trim();
            if text.is_empty() || (terminated && is_paragraph_label(text)) {
                None
            } else {
                Some(classify_line(text))
            }
        })
        .collect();
    debug!("classified {} statements", statements.len());
    statements
}

/// Classify one trimmed procedural line. The first matching pattern wins.
pub fn classify_line(line: &str) -> Statement {
    STATEMENT_PATTERNS
        .iter()
        .find_map(|pattern| pattern.regex.captures(line).map(|caps| (pattern.build)(&caps)))
        .unwrap_or_else(|| {
            debug!("unrecognized statement: {line}");
            Statement::Unrecognized {
                line: line.to_string(),
            }
        })
}

/// Every kind whose pattern matches `line`, in priority order. Lines matching
/// no pattern yield `[Unrecognized]`.
pub fn matching_kinds(line: &str) -> Vec<StatementKind> {
    let kinds: Vec<_> = STATEMENT_PATTERNS
        .iter()
        .filter(|pattern| pattern.regex.is_match(line))
        .map(|pattern| pattern.kind)
        .collect();
    if kinds.is_empty() {
        vec![StatementKind::Unrecognized]
    } else {
        kinds
    }
}

/// Lines between PROCEDURE DIVISION and END PROGRAM (or the end of the text),
/// each paired with whether its terminator was stripped.
fn procedure_region(lines: &[SourceLine]) -> Vec<(&str, bool)> {
    let mut region = vec![];
    let mut started = false;
    for line in lines {
        let mut text = line.text.as_str();
        if !started {
            let Some(marker) = PROCEDURE_DIVISION.find(text) else {
                continue;
            };
            text = &text[marker.end()..];
            started = true;
        }
        if let Some(end) = END_PROGRAM.find(text) {
            region.push((&text[..end.start()], false));
            break;
        }
        region.push((text, line.terminated));
    }
    region
}

fn is_paragraph_label(text: &str) -> bool {
    PARAGRAPH_LABEL
        .captures(text)
        .is_some_and(|caps| !NEVER_LABELS.contains(&caps[1].to_ascii_uppercase().as_str()))
}

/// Split DISPLAY arguments on whitespace outside of quoted regions.
fn split_operands(text: &str) -> Vec<String> {
    let mut tokens = vec![];
    let mut current = String::new();
    let mut quote: Option<char> = None;
    for c in text.chars() {
        match quote {
            Some(open) => {
                current.push(c);
                if c == open {
                    quote = None;
                }
            }
            None if c == '\'' || c == '"' => {
                current.push(c);
                quote = Some(c);
            }
            None if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Figurative;
    use crate::normalize::normalize_lines;

    fn classify_source(source: &str) -> Vec<Statement> {
        classify_procedures(&normalize_lines(source))
    }

    #[test]
    fn test_pattern_precedence_table() {
        // every sample matches exactly its own pattern and no earlier one
        let table = [
            ("DISPLAY 'HELLO'", StatementKind::Display),
            ("DISPLAY", StatementKind::Display),
            ("display total", StatementKind::Display),
            ("DISPLAY 'MOVE X TO Y'", StatementKind::Display),
            ("MOVE 'A' TO WS-NAME", StatementKind::Move),
            ("MOVE X TO Y", StatementKind::Move),
            ("move 'IF = 1' to y", StatementKind::Move),
            ("COMPUTE RESULT = NUM1 + NUM2", StatementKind::Compute),
            ("COMPUTE X=1", StatementKind::Compute),
            ("ACCEPT NUM1", StatementKind::Accept),
            ("IF X EQUAL Y", StatementKind::If),
            ("IF DISPLAY-FLAG = 1", StatementKind::If),
            ("STOP RUN", StatementKind::StopRun),
            ("stop   run", StatementKind::StopRun),
            ("STOP RUN NOW", StatementKind::Unrecognized),
            ("PERFORM SUB-PARA", StatementKind::Unrecognized),
            ("ELSE IF X = 1", StatementKind::Unrecognized),
            ("END-IF", StatementKind::Unrecognized),
            ("DISPLAYED", StatementKind::Unrecognized),
            ("MOVE X", StatementKind::Unrecognized),
            ("COMPUTE X", StatementKind::Unrecognized),
            ("ACCEPT", StatementKind::Unrecognized),
            ("IF", StatementKind::Unrecognized),
        ];
        for (line, kind) in table {
            assert_eq!(matching_kinds(line), vec![kind], "line: {line}");
            assert_eq!(classify_line(line).kind(), kind, "line: {line}");
        }
    }

    #[test]
    fn test_display_operands() {
        let stmt = classify_line("DISPLAY \"RESULT: \" RESULT");
        assert_eq!(
            stmt,
            Statement::Display {
                operands: vec![
                    Operand::Text("RESULT: ".to_string()),
                    Operand::Reference("RESULT".to_string()),
                ]
            }
        );
        assert_eq!(classify_line("DISPLAY").kind(), StatementKind::Display);
        assert_eq!(
            classify_line("DISPLAY 'HELLO, WORLD!'"),
            Statement::Display {
                operands: vec![Operand::Text("HELLO, WORLD!".to_string())]
            }
        );
    }

    #[test]
    fn test_move_compute_accept_if_fields() {
        assert_eq!(
            classify_line("MOVE SPACES TO WS-NAME"),
            Statement::Move {
                source: Operand::Figurative(Figurative::Space),
                target: "WS-NAME".to_string(),
            }
        );
        assert_eq!(
            classify_line("COMPUTE RESULT = NUM1 * NUM2"),
            Statement::Compute {
                target: "RESULT".to_string(),
                expression: "NUM1 * NUM2".to_string(),
            }
        );
        assert_eq!(
            classify_line("ACCEPT WS-NAME"),
            Statement::Accept {
                target: "WS-NAME".to_string()
            }
        );
        assert_eq!(
            classify_line("IF NUM1 GREATER THAN NUM2"),
            Statement::If {
                condition: "NUM1 GREATER THAN NUM2".to_string()
            }
        );
    }

    #[test]
    fn test_move_source_literal_containing_to() {
        assert_eq!(
            classify_line("MOVE 'GO TO LUNCH' TO WS-MSG"),
            Statement::Move {
                source: Operand::Text("GO TO LUNCH".to_string()),
                target: "WS-MSG".to_string(),
            }
        );
        assert_eq!(
            classify_line("MOVE \"IT''S TO DO\" TO WS-NOTE"),
            Statement::Move {
                source: Operand::Text("IT''S TO DO".to_string()),
                target: "WS-NOTE".to_string(),
            }
        );
        assert_eq!(
            classify_line("MOVE 'A''B TO C' TO WS-X"),
            Statement::Move {
                source: Operand::Text("A'B TO C".to_string()),
                target: "WS-X".to_string(),
            }
        );
    }

    #[test]
    fn test_procedure_region_and_labels() {
        let source = "       IDENTIFICATION DIVISION.
       PROGRAM-ID. DEMO.
       PROCEDURE DIVISION.
       MAIN-PARA.
           DISPLAY 'START'.

       WORK SECTION.
           PERFORM SUB-PARA.
           GOBACK.
       END PROGRAM DEMO.
           DISPLAY 'AFTER'.";
        let stmts = classify_source(source);
        assert_eq!(stmts.len(), 3);
        assert_eq!(stmts[0].kind(), StatementKind::Display);
        assert_eq!(
            stmts[1],
            Statement::Unrecognized {
                line: "PERFORM SUB-PARA".to_string()
            }
        );
        assert_eq!(
            stmts[2],
            Statement::Unrecognized {
                line: "GOBACK".to_string()
            }
        );
    }

    #[test]
    fn test_unterminated_single_token_kept() {
        let stmts = classify_source("PROCEDURE DIVISION.\n    IF X = 1\n    CONTINUE\n    END-IF.\n");
        let kinds: Vec<_> = stmts.iter().map(Statement::kind).collect();
        assert_eq!(
            kinds,
            [StatementKind::If, StatementKind::Unrecognized, StatementKind::Unrecognized]
        );
    }

    #[test]
    fn test_missing_procedure_division() {
        assert!(classify_source("DATA DIVISION.\n01 X PIC 9.").is_empty());
        assert!(classify_source("").is_empty());
    }

    #[test]
    fn test_text_after_division_marker() {
        let stmts = classify_source("PROCEDURE DIVISION USING WS-ARGS.\nSTOP RUN.\nEND PROGRAM X.");
        assert_eq!(
            stmts,
            [
                Statement::Unrecognized {
                    line: "USING WS-ARGS".to_string()
                },
                Statement::StopRun,
            ]
        );
    }

    #[test]
    fn test_split_operands_respects_quotes() {
        assert_eq!(
            split_operands("'A B'  X \"C'D\""),
            vec!["'A B'", "X", "\"C'D\""]
        );
        assert!(split_operands("   ").is_empty());
    }
}
