// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle selector: which visual treatment a state gets.
//!
//! The message is never touched here. Only the icon slot and the assistive
//! framing depend on the state.

use serde::Serialize;

use crate::invocation::InvocationState;

/// ARIA-style role exposed while a call is in flight.
pub const STATUS_ROLE: &str = "status";

/// Marker for the progress indicator that replaces the classified icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spinner {
    Spinner,
}

/// Visual treatment for a lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Treatment {
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_override: Option<Spinner>,
}

impl Treatment {
    pub const IN_PROGRESS: Treatment = Treatment {
        busy: true,
        icon_override: Some(Spinner::Spinner),
    };

    pub const COMPLETED: Treatment = Treatment {
        busy: false,
        icon_override: None,
    };

    /// Prefix of the assistive label.
    pub const fn label_prefix(&self) -> &'static str {
        if self.busy {
            "In progress"
        } else {
            "Completed"
        }
    }

    /// Assistive label with the classified message embedded.
    pub fn accessible_label(&self, message: &str) -> String {
        format!("{}: {}", self.label_prefix(), message)
    }

    /// Role announced to assistive technology, if any.
    pub const fn role(&self) -> Option<&'static str> {
        if self.busy {
            Some(STATUS_ROLE)
        } else {
            None
        }
    }
}

pub const fn select_treatment(state: InvocationState) -> Treatment {
    match state {
        InvocationState::PartialCall | InvocationState::Call => Treatment::IN_PROGRESS,
        InvocationState::Result => Treatment::COMPLETED,
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
