// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders a translation unit as one Java class
//!
//! Layout, in order: doc header, class declaration, one field per data item,
//! `main` entry point, `execute` method holding every translated statement,
//! closing braces. Translated statements are emitted as-is; an `if` without
//! a closing brace stays unbalanced.

use crate::data::{TranslationUnit, VariableDecl};
use crate::renderer::java_writer::{render_to_string, JavaWriter};
use crate::translation::StatementTranslator;

/// Comment opening the field block
pub const FIELDS_MARKER: &str = "// Variable declarations";
/// Signature prefix of the entry point
pub const MAIN_MARKER: &str = "public static void main";
/// Signature prefix of the method holding the procedure statements
pub const EXECUTE_MARKER: &str = "public void execute";

/// Render the complete Java source for `unit`.
pub fn render_class(unit: &TranslationUnit) -> String {
    let class_name = unit.identity.type_name();
    let translator = StatementTranslator::new(unit);

    render_to_string(|w| {
        w.line("/**");
        w.line(&format!(" * Java translation of COBOL program {}", unit.identity));
        w.line(" * Generated by cobol-refactor");
        w.line(" */");
        w.block(&format!("public class {class_name} {{"), |w| {
            w.line(FIELDS_MARKER);
            for var in &unit.variables {
                render_field(w, var);
            }
            w.newline();

            w.block(&format!("{MAIN_MARKER}(String[] args) {{"), |w| {
                w.line(&format!("{class_name} program = new {class_name}();"));
                w.line("program.execute();");
            });
            w.newline();

            w.line("/**");
            w.line(" * Main program execution");
            w.line(" */");
            w.block(&format!("{EXECUTE_MARKER}() {{"), |w| {
                w.lines_with(&unit.statements, |w, statement| {
                    w.write(&translator.translate(statement))
                });
            });
        });
    })
}

fn render_field(w: &mut JavaWriter, var: &VariableDecl) {
    let java_type = var.java_type();
    w.line(&format!(
        "private {java_type} {} = {};  // Translated from {}",
        var.target_name,
        java_type.default_value(),
        var.source_name
    ));
}
