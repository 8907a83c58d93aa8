// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Display filename extraction for path-bearing tool arguments.

/// Shown in place of a filename when a path is absent or has no segments.
pub const UNKNOWN_FILE: &str = "Unknown file";

/// Extract the last path segment for display.
///
/// Both `/` and `\` act as separators, in any mix, and runs of separators
/// collapse. Absent, empty, and separator-only paths all yield
/// [`UNKNOWN_FILE`].
pub fn extract_filename(path: Option<&str>) -> &str {
    path.unwrap_or_default()
        .rsplit(is_separator)
        .find(|segment| !segment.is_empty())
        .unwrap_or(UNKNOWN_FILE)
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

#[cfg(test)]
#[path = "filename_tests.rs"]
mod tests;
