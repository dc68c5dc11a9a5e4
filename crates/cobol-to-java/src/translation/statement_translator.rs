// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Translates classified COBOL statements into Java statements
//!
//! One conversion per statement kind. Every conversion is total: input that
//! cannot be mapped is passed through, never rejected. A translation may span
//! several lines; inner lines carry their own relative indentation.

use itertools::Itertools;

use crate::data::naming::map_name;
use crate::data::{Figurative, JavaFieldType, Operand, Statement, TranslationUnit};
use crate::renderer::escape::java_string_literal;
use crate::translation::expression::{map_identifiers, rewrite_condition};

/// Comment line preceding the termination call of STOP RUN.
pub const STOP_RUN_COMMENT: &str = "// End of program execution";
/// Prefix of the comment emitted for untranslated lines.
pub const TODO_PREFIX: &str = "// TODO: Translate COBOL: ";

pub struct StatementTranslator<'a> {
    unit: &'a TranslationUnit,
}

impl<'a> StatementTranslator<'a> {
    pub fn new(unit: &'a TranslationUnit) -> Self {
        Self { unit }
    }

    /// Translate one statement into Java source text.
    pub fn translate(&self, statement: &Statement) -> String {
        match statement {
            Statement::Display { operands } => translate_display(operands),
            Statement::Move { source, target } => translate_move(source, target),
            Statement::Compute { target, expression } => translate_compute(target, expression),
            Statement::Accept { target } => {
                let target_type = self
                    .unit
                    .find_variable(&map_name(target))
                    .map(|var| var.java_type());
                translate_accept(target, target_type)
            }
            Statement::If { condition } => translate_if(condition),
            Statement::StopRun => translate_stop_run(),
            Statement::Unrecognized { line } => translate_unrecognized(line),
        }
    }
}

/// Java expression for a DISPLAY or MOVE operand
pub fn operand_expression(operand: &Operand) -> String {
    match operand {
        Operand::Text(text) => java_string_literal(text),
        Operand::Number(number) => number.clone(),
        Operand::Figurative(Figurative::Zero) => "0".to_string(),
        Operand::Figurative(Figurative::Space) => java_string_literal(" "),
        Operand::Reference(name) => map_name(name),
    }
}

pub fn translate_display(operands: &[Operand]) -> String {
    let args = operands.iter().map(operand_expression).join(" + ");
    format!("System.out.println({args});")
}

pub fn translate_move(source: &Operand, target: &str) -> String {
    format!("{} = {};", map_name(target), operand_expression(source))
}

pub fn translate_compute(target: &str, expression: &str) -> String {
    format!("{} = {};", map_name(target), map_identifiers(expression))
}

/// Read one line from stdin into `target`. The scanner is scoped to the
/// `try` block; read failures are reported on stderr.
pub fn translate_accept(target: &str, target_type: Option<JavaFieldType>) -> String {
    let read = target_type
        .unwrap_or(JavaFieldType::String)
        .parse_input("scanner.nextLine()");
    [
        "try {".to_string(),
        "    java.util.Scanner scanner = new java.util.Scanner(System.in);".to_string(),
        format!("    {} = {read};", map_name(target)),
        "} catch (Exception e) {".to_string(),
        "    System.err.println(\"Error reading input: \" + e.getMessage());".to_string(),
        "}".to_string(),
    ]
    .join("\n")
}

/// Opens the conditional block only; the closing brace is never emitted.
pub fn translate_if(condition: &str) -> String {
    format!("if ({}) {{", rewrite_condition(condition))
}

pub fn translate_stop_run() -> String {
    format!("{STOP_RUN_COMMENT}\nSystem.exit(0);")
}

pub fn translate_unrecognized(line: &str) -> String {
    format!("{TODO_PREFIX}{line}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{VariableDecl, VariableKind};
    use crate::extraction::classify_line;

    fn translate_line(line: &str) -> String {
        let unit = TranslationUnit::default();
        StatementTranslator::new(&unit).translate(&classify_line(line))
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(translate_line("DISPLAY 'HELLO, WORLD!'"), "System.out.println(\"HELLO, WORLD!\");");
        assert_eq!(translate_line("DISPLAY \"HELLO, WORLD!\""), "System.out.println(\"HELLO, WORLD!\");");
        assert_eq!(translate_line("DISPLAY WS-NAME"), "System.out.println(ws_name);");
        assert_eq!(
            translate_line("DISPLAY 'RESULT: ' RESULT"),
            "System.out.println(\"RESULT: \" + result);"
        );
        assert_eq!(translate_line("DISPLAY"), "System.out.println();");
    }

    #[test]
    fn test_move_forms() {
        assert_eq!(translate_line("MOVE 'ABC' TO WS-CODE"), "ws_code = \"ABC\";");
        assert_eq!(translate_line("MOVE NUM1 TO RESULT"), "result = num1;");
        assert_eq!(translate_line("MOVE 100 TO WS-LIMIT"), "ws_limit = 100;");
        assert_eq!(translate_line("MOVE ZERO TO WS-TOTAL"), "ws_total = 0;");
        assert_eq!(translate_line("MOVE SPACES TO WS-NAME"), "ws_name = \" \";");
        assert_eq!(translate_line("MOVE 'GO TO LUNCH' TO WS-MSG"), "ws_msg = \"GO TO LUNCH\";");
    }

    #[test]
    fn test_compute() {
        assert_eq!(translate_line("COMPUTE RESULT = NUM1 + NUM2"), "result = num1 + num2;");
        assert_eq!(
            translate_line("COMPUTE WS-NET = WS-GROSS - WS-TAX"),
            "ws_net = ws_gross - ws_tax;"
        );
    }

    #[test]
    fn test_accept_text_target() {
        let java = translate_line("ACCEPT WS-NAME");
        assert_eq!(
            java,
            "try {
    java.util.Scanner scanner = new java.util.Scanner(System.in);
    ws_name = scanner.nextLine();
} catch (Exception e) {
    System.err.println(\"Error reading input: \" + e.getMessage());
}"
        );
    }

    #[test]
    fn test_accept_numeric_target() {
        let unit = TranslationUnit {
            variables: vec![
                VariableDecl::new(1, "NUM1", VariableKind::Numeric, 5),
                VariableDecl::new(1, "TOTAL", VariableKind::Numeric, 12),
            ],
            ..Default::default()
        };
        let translator = StatementTranslator::new(&unit);
        let java = translator.translate(&classify_line("ACCEPT NUM1"));
        assert!(java.contains("    num1 = Integer.parseInt(scanner.nextLine().trim());"));
        let java = translator.translate(&classify_line("ACCEPT TOTAL"));
        assert!(java.contains("    total = Long.parseLong(scanner.nextLine().trim());"));
    }

    #[test]
    fn test_if_opens_block_only() {
        assert_eq!(translate_line("IF NUM1 GREATER THAN NUM2"), "if (num1 > num2) {");
        assert_eq!(translate_line("IF WS-A NOT EQUAL WS-B"), "if (ws_a != ws_b) {");
    }

    #[test]
    fn test_stop_run_two_lines() {
        assert_eq!(translate_line("STOP RUN"), "// End of program execution\nSystem.exit(0);");
    }

    #[test]
    fn test_unrecognized_kept_verbatim() {
        assert_eq!(
            translate_line("PERFORM SUB-PARA"),
            "// TODO: Translate COBOL: PERFORM SUB-PARA"
        );
    }
}
