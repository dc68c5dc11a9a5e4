// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Name mapping from COBOL data names to Java identifiers
//!
//! COBOL names are upper-case and hyphen-separated (`WS-TOTAL-AMOUNT`); Java
//! identifiers are produced by lower-casing and replacing hyphens with
//! underscores (`ws_total_amount`). Results that would not be valid Java
//! identifiers are escaped: reserved words get a trailing underscore and
//! names with a leading digit get a leading underscore.
//!
//! The mapping is idempotent on its own output: `map_name(map_name(x)) == map_name(x)`.

/// Java reserved words and literals that cannot be used as identifiers.
const JAVA_RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "var", "yield", "record",
];

/// Check if a name is a Java reserved word
pub fn is_java_reserved(name: &str) -> bool {
    JAVA_RESERVED.contains(&name)
}

/// Map a COBOL data name to a Java field/local identifier.
pub fn map_name(name: &str) -> String {
    let mapped = name.trim().to_lowercase().replace('-', "_");
    escape_identifier(mapped)
}

/// Map a COBOL program id to a Java type name. Case is preserved.
pub fn map_type_name(program_id: &str) -> String {
    let mapped = program_id.replace('-', "_");
    escape_identifier(mapped)
}

fn escape_identifier(name: String) -> String {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else if is_java_reserved(&name) {
        format!("{name}_")
    } else {
        name
    }
}
