// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Closed sets of tool and command identifiers the classifier understands.

use std::fmt;

/// Tool families with dedicated display rules.
///
/// Anything that does not parse into one of these is displayed by its raw
/// name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Single-file text editor (`str_replace_editor`).
    Editor,
    /// Filesystem manager (`file_manager`).
    FileManager,
}

impl ToolKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Editor => "str_replace_editor",
            Self::FileManager => "file_manager",
        }
    }

    /// Try to parse a tool kind from an invocation's tool name.
    ///
    /// Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "str_replace_editor" => Some(Self::Editor),
            "file_manager" => Some(Self::FileManager),
            _ => None,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commands of the editor tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    Create,
    StrReplace,
    Insert,
    View,
    UndoEdit,
}

impl EditorCommand {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::StrReplace => "str_replace",
            Self::Insert => "insert",
            Self::View => "view",
            Self::UndoEdit => "undo_edit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "create" => Some(Self::Create),
            "str_replace" => Some(Self::StrReplace),
            "insert" => Some(Self::Insert),
            "view" => Some(Self::View),
            "undo_edit" => Some(Self::UndoEdit),
            _ => None,
        }
    }
}

/// Commands of the file-manager tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileManagerCommand {
    Delete,
    Rename,
}

impl FileManagerCommand {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Rename => "rename",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "delete" => Some(Self::Delete),
            "rename" => Some(Self::Rename),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tool_name_tests.rs"]
mod tests;
