// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

use crate::data::naming::map_name;

/// Largest numeric size that still fits a Java `int`
const MAX_INT_DIGITS: u32 = 9;

/// Storage class of a data item, decided by its picture clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    /// Picture contains `X`
    Text,
    Numeric,
}

/// One level-number declaration from the DATA DIVISION
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDecl {
    pub level: u32,
    /// Name as written in the source, kept for documentation
    pub source_name: String,
    pub target_name: String,
    pub kind: VariableKind,
    /// Parenthesized picture length, 1 when absent
    pub size: u32,
}

impl VariableDecl {
    pub fn new(level: u32, source_name: &str, kind: VariableKind, size: u32) -> Self {
        Self {
            level,
            source_name: source_name.to_string(),
            target_name: map_name(source_name),
            kind,
            size,
        }
    }

    pub fn java_type(&self) -> JavaFieldType {
        match self.kind {
            VariableKind::Text => JavaFieldType::String,
            VariableKind::Numeric if self.size > MAX_INT_DIGITS => JavaFieldType::Long,
            VariableKind::Numeric => JavaFieldType::Int,
        }
    }
}

/// Java type a declaration is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JavaFieldType {
    String,
    Int,
    Long,
}

impl JavaFieldType {
    /// Initializer literal for a freshly constructed field
    pub fn default_value(&self) -> &'static str {
        match self {
            JavaFieldType::String => "\"\"",
            JavaFieldType::Int | JavaFieldType::Long => "0",
        }
    }

    /// Expression converting a line of input (`expr`) into this type
    pub fn parse_input(&self, expr: &str) -> String {
        match self {
            JavaFieldType::String => expr.to_string(),
            JavaFieldType::Int => format!("Integer.parseInt({expr}.trim())"),
            JavaFieldType::Long => format!("Long.parseLong({expr}.trim())"),
        }
    }
}

impl Display for JavaFieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JavaFieldType::String => write!(f, "String"),
            JavaFieldType::Int => write!(f, "int"),
            JavaFieldType::Long => write!(f, "long"),
        }
    }
}
