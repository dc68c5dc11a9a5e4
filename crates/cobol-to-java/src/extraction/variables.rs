// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Data item extraction from the DATA DIVISION
//!
//! Declarations are read as a flat list: level numbers are kept but no group
//! structure is built, and duplicate names stay separate entries.

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::data::{VariableDecl, VariableKind};
use crate::extraction::{region, DATA_DIVISION, PROCEDURE_DIVISION};

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)([0-9]+)\s+([A-Za-z0-9_][A-Za-z0-9_-]*)\s+(?:PICTURE|PIC)\s+([X9]+)(?:\(([0-9]+)\))?",
    )
    .unwrap()
});

/// Collect every picture declaration between DATA DIVISION and PROCEDURE DIVISION.
pub fn extract_variables(text: &str) -> Vec<VariableDecl> {
    let Some(data_section) = region(text, &DATA_DIVISION, &PROCEDURE_DIVISION) else {
        debug!("no DATA DIVISION found");
        return vec![];
    };

    let variables: Vec<_> = DECLARATION
        .captures_iter(data_section)
        .filter_map(|caps| declaration(&caps))
        .collect();
    debug!("extracted {} data items", variables.len());
    variables
}

fn declaration(caps: &Captures<'_>) -> Option<VariableDecl> {
    let name = &caps[2];
    let Ok(level) = caps[1].parse::<u32>() else {
        warn!("skipping {name}: level number {} out of range", &caps[1]);
        return None;
    };
    let size = match caps.get(4) {
        Some(size) => match size.as_str().parse::<u32>() {
            Ok(size) => size,
            Err(_) => {
                warn!("skipping {name}: picture size {} out of range", size.as_str());
                return None;
            }
        },
        None => 1,
    };
    let kind = if caps[3].to_ascii_uppercase().contains('X') {
        VariableKind::Text
    } else {
        VariableKind::Numeric
    };
    Some(VariableDecl::new(level, name, kind, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALCULATOR: &str = "    DATA DIVISION
    WORKING-STORAGE SECTION
    01 NUM1 PIC 9(5)
    01 NUM2 PIC 9(5)
    01 RESULT PIC 9(10)
    01 OPERATION PIC X
    PROCEDURE DIVISION
    01 IGNORED PIC X(3)";

    #[test]
    fn test_declarations_in_order() {
        let vars = extract_variables(CALCULATOR);
        let names: Vec<_> = vars.iter().map(|v| v.target_name.as_str()).collect();
        assert_eq!(names, ["num1", "num2", "result", "operation"]);
    }

    #[test]
    fn test_numeric_and_text_kinds() {
        let vars = extract_variables(CALCULATOR);
        assert_eq!(vars[0], VariableDecl::new(1, "NUM1", VariableKind::Numeric, 5));
        assert_eq!(vars[3].kind, VariableKind::Text);
        assert_eq!(vars[3].size, 1);
        assert_eq!(vars[3].source_name, "OPERATION");
    }

    #[test]
    fn test_picture_keyword_and_lower_case() {
        let vars = extract_variables("data division\n05 ws-name picture x(20)\n77 ws-count pic 99");
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].level, 5);
        assert_eq!(vars[0].kind, VariableKind::Text);
        assert_eq!(vars[0].size, 20);
        assert_eq!(vars[1].level, 77);
        assert_eq!(vars[1].kind, VariableKind::Numeric);
        assert_eq!(vars[1].size, 1);
    }

    #[test]
    fn test_mixed_picture_is_text() {
        let vars = extract_variables("DATA DIVISION\n01 CODE-FIELD PIC 9X(4)");
        assert_eq!(vars[0].kind, VariableKind::Text);
        assert_eq!(vars[0].size, 4);
    }

    #[test]
    fn test_duplicates_preserved() {
        let vars = extract_variables("DATA DIVISION\n01 TOTAL PIC 9(3)\n01 TOTAL PIC X(2)");
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].kind, VariableKind::Numeric);
        assert_eq!(vars[1].kind, VariableKind::Text);
    }

    #[test]
    fn test_no_data_division() {
        assert!(extract_variables("01 X PIC 9\nPROCEDURE DIVISION").is_empty());
        assert!(extract_variables("").is_empty());
    }

    #[test]
    fn test_oversized_declaration_skipped() {
        let vars = extract_variables("DATA DIVISION\n01 BIG PIC X(99999999999)\n01 OK PIC X");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].target_name, "ok");
    }
}
