// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Represents options provided to the translator. Options are read from a toml
/// source; some can be overridden by command line flags.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Directory the generated `.java` file is written to.
    pub output_dir: String,
    /// Verbosity level for logging.
    pub verbosity_level: LevelFilter,
    /// Whether to add explanatory comments to the generated source.
    pub annotate: bool,
    /// Whether to produce optimization tips.
    pub suggest_optimizations: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            verbosity_level: LevelFilter::Info,
            annotate: true,
            suggest_optimizations: true,
        }
    }
}
