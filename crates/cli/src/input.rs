// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding invocation records from JSON input.

use serde_json::Value;
use thiserror::Error;

use crate::invocation::ToolInvocation;

/// Errors that can occur when reading invocation records
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid invocation JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid invocation on line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a JSON document holding one invocation or an array of them.
///
/// Whitespace-only input holds no invocations.
pub fn parse_document(content: &str) -> Result<Vec<ToolInvocation>, InputError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value = serde_json::from_str(content)?;
    let invocations = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(invocations)
}

/// Parse one line of line-delimited input.
///
/// `line` is 1-based and only used for error reporting. Blank lines yield
/// `Ok(None)`.
pub fn parse_line(content: &str, line: usize) -> Result<Option<ToolInvocation>, InputError> {
    if content.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(content)
        .map(Some)
        .map_err(|source| InputError::Line { line, source })
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
