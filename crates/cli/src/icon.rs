// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed icon set for tool invocation badges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon shown next to a classified message once the call has completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    #[serde(rename = "file-plus")]
    Create,
    #[serde(rename = "file-edit")]
    Edit,
    #[serde(rename = "eye")]
    View,
    #[serde(rename = "trash-2")]
    Delete,
    #[serde(rename = "move")]
    Move,
    #[serde(rename = "settings")]
    Settings,
}

impl Icon {
    pub const ALL: [Icon; 6] = [
        Icon::Create,
        Icon::Edit,
        Icon::View,
        Icon::Delete,
        Icon::Move,
        Icon::Settings,
    ];

    /// Stable symbolic name, shared with the JSON output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create => "file-plus",
            Self::Edit => "file-edit",
            Self::View => "eye",
            Self::Delete => "trash-2",
            Self::Move => "move",
            Self::Settings => "settings",
        }
    }

    /// Single-cell unicode glyph for terminals.
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Create => "✚",
            Self::Edit => "✎",
            Self::View => "◉",
            Self::Delete => "✖",
            Self::Move => "➜",
            Self::Settings => "⚙",
        }
    }

    /// Fallback for terminals without unicode symbols.
    pub const fn ascii_glyph(&self) -> &'static str {
        match self {
            Self::Create => "+",
            Self::Edit => "~",
            Self::View => "o",
            Self::Delete => "x",
            Self::Move => ">",
            Self::Settings => "*",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "icon_tests.rs"]
mod tests;
