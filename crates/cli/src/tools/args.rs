// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed view over the open argument mapping of a tool invocation.
//!
//! Only `command`, `path` and `new_path` are read. Other keys are ignored,
//! and a known key holding anything but a string is treated as absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Arguments the classifier reads from an invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolArgs {
    #[serde(
        default,
        deserialize_with = "lenient_str",
        skip_serializing_if = "Option::is_none"
    )]
    pub command: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_str",
        skip_serializing_if = "Option::is_none"
    )]
    pub path: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_str",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_path: Option<String>,
}

impl ToolArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_new_path(mut self, new_path: impl Into<String>) -> Self {
        self.new_path = Some(new_path.into());
        self
    }

    /// Build from an arbitrary JSON value.
    ///
    /// Non-object values produce empty arguments.
    pub fn from_value(value: &Value) -> Self {
        Self {
            command: extract_str(value, "command").map(str::to_owned),
            path: extract_str(value, "path").map(str::to_owned),
            new_path: extract_str(value, "new_path").map(str::to_owned),
        }
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn new_path(&self) -> Option<&str> {
        self.new_path.as_deref()
    }
}

/// Extract a string field by name.
pub fn extract_str<'a>(input: &'a Value, key: &str) -> Option<&'a str> {
    input.get(key).and_then(|v| v.as_str())
}

fn lenient_str<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Deserialize an `args` mapping, degrading non-objects to empty arguments.
pub(crate) fn lenient_args<'de, D>(deserializer: D) -> Result<ToolArgs, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(ToolArgs::from_value(&Value::deserialize(deserializer)?))
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
