// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by toolbadge are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `TOOLBADGE_CONFIG` — Config file path (also read by `--config`).
pub fn config_path() -> Option<PathBuf> {
    non_empty(names::TOOLBADGE_CONFIG).map(PathBuf::from)
}

/// `NO_COLOR` — Any non-empty value disables automatic color.
pub fn no_color() -> bool {
    non_empty(names::NO_COLOR).is_some()
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
