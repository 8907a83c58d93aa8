// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool invocation records as supplied by the tool-execution side.

use serde::{Deserialize, Serialize};

use crate::tools::args::{lenient_args, ToolArgs};

/// Lifecycle tag of a tool invocation.
///
/// Callers advance an invocation `PartialCall -> Call -> Result`, or create
/// it directly in `Result` for calls that already completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvocationState {
    /// Arguments are still streaming in.
    PartialCall,
    /// Arguments are complete and the tool is running.
    Call,
    /// The tool has returned.
    Result,
}

impl InvocationState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PartialCall => "partial-call",
            Self::Call => "call",
            Self::Result => "result",
        }
    }
}

/// A single tool call tracked through its lifecycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    /// Opaque caller identifier, never interpreted.
    #[serde(default)]
    pub tool_call_id: String,

    pub tool_name: String,

    #[serde(default, deserialize_with = "lenient_args")]
    pub args: ToolArgs,

    pub state: InvocationState,

    /// Tool output once `state` is `Result`. Display never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

impl ToolInvocation {
    pub fn new(
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
        args: ToolArgs,
        state: InvocationState,
    ) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            args,
            state,
            result: None,
        }
    }

    /// Same invocation advanced to `state`.
    pub fn with_state(mut self, state: InvocationState) -> Self {
        self.state = state;
        self
    }

    pub fn with_result(mut self, result: serde_json::Value) -> Self {
        self.result = Some(result);
        self.state = InvocationState::Result;
        self
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
