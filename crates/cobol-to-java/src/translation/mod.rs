// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Translation of classified statements into Java statements

pub mod expression;
pub mod statement_translator;

pub use statement_translator::StatementTranslator;
