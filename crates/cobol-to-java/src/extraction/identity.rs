// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::data::ProgramIdentity;

static PROGRAM_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)PROGRAM-ID\.\s*([A-Za-z0-9-]+)").unwrap());

/// Find the declared `PROGRAM-ID`, falling back to the default identity.
pub fn extract_identity(text: &str) -> ProgramIdentity {
    match PROGRAM_ID.captures(text) {
        Some(caps) => ProgramIdentity::new(&caps[1]),
        None => {
            debug!("no PROGRAM-ID found, using default program identity");
            ProgramIdentity::default()
        }
    }
}
