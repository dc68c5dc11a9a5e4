// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Data model of a translation unit

pub mod naming;
pub mod program;
pub mod statements;
pub mod variables;

pub use program::{ProgramIdentity, TranslationUnit};
pub use statements::{Figurative, Operand, Statement, StatementKind};
pub use variables::{JavaFieldType, VariableDecl, VariableKind};
