// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

use crate::data::naming::map_type_name;
use crate::data::statements::Statement;
use crate::data::variables::VariableDecl;

/// Identifier used when the source declares no `PROGRAM-ID`.
pub const DEFAULT_PROGRAM_ID: &str = "CobolProgram";

/// The declared identifier of a COBOL program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramIdentity(String);

impl ProgramIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as written in the source
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Java type name derived from the identifier
    pub fn type_name(&self) -> String {
        map_type_name(&self.0)
    }
}

impl Default for ProgramIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_ID)
    }
}

impl Display for ProgramIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured result of reading one COBOL program, consumed once by the renderer.
#[derive(Debug, Clone, Default)]
pub struct TranslationUnit {
    pub identity: ProgramIdentity,
    /// Flat declaration list in source order. Duplicates are kept.
    pub variables: Vec<VariableDecl>,
    /// Procedural statements in source order.
    pub statements: Vec<Statement>,
}

impl TranslationUnit {
    /// First declaration whose Java name is `target_name`
    pub fn find_variable(&self, target_name: &str) -> Option<&VariableDecl> {
        self.variables
            .iter()
            .find(|var| var.target_name == target_name)
    }
}
