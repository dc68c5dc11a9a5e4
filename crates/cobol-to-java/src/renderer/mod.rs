// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Java source rendering

pub mod class_renderer;
pub mod escape;
pub mod java_writer;

pub use class_renderer::render_class;
