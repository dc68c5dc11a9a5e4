// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Rule-based translation of COBOL programs into Java
//!
//! The pipeline reads one COBOL source text and produces the generated Java
//! source plus a list of optimization tips:
//!
//! ```text
//! text → normalize → { identity, variables, statements } → render_class
//!      → annotate (optional) → suggest_optimizations (optional)
//! ```
//!
//! Every call is a pure function of its input; nothing is shared between calls.

use log::debug;

pub mod advisor;
pub mod annotate;
pub mod data;
pub mod extraction;
pub mod normalize;
pub mod options;
pub mod renderer;
pub mod translation;

pub use data::{ProgramIdentity, Statement, StatementKind, TranslationUnit, VariableDecl, VariableKind};
pub use options::Options;

/// Extension of generated source files.
pub const JAVA_EXTENSION: &str = "java";

/// Output of one translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub identity: ProgramIdentity,
    /// Generated Java source
    pub source: String,
    /// Optimization tips in rule order, empty when tips are disabled
    pub tips: Vec<String>,
}

impl Translation {
    /// Suggested file name: the generated class name with the Java extension.
    pub fn file_name(&self) -> String {
        format!("{}.{JAVA_EXTENSION}", self.identity.type_name())
    }
}

/// Read the translation unit out of raw COBOL text.
pub fn parse_unit(text: &str) -> TranslationUnit {
    let lines = normalize::normalize_lines(text);
    let normalized = normalize::join_lines(&lines);
    TranslationUnit {
        identity: extraction::extract_identity(&normalized),
        variables: extraction::extract_variables(&normalized),
        statements: extraction::classify_procedures(&lines),
    }
}

/// Translate with default options: comments added and tips produced.
pub fn translate(text: &str) -> Translation {
    translate_with_options(text, &Options::default())
}

pub fn translate_with_options(text: &str, options: &Options) -> Translation {
    let unit = parse_unit(text);
    debug!(
        "translating {}: {} data items, {} statements",
        unit.identity,
        unit.variables.len(),
        unit.statements.len()
    );

    let mut source = renderer::render_class(&unit);
    if options.annotate {
        source = annotate::annotate(&source);
    }
    let tips = if options.suggest_optimizations {
        advisor::suggest_optimizations(&source)
    } else {
        vec![]
    };

    Translation {
        identity: unit.identity,
        source,
        tips,
    }
}
