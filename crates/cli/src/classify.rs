// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation classifier: tool name + arguments to message and icon.
//!
//! Dispatch is two-level, first on [`ToolKind`] then on the family's command
//! enum. Every level has a default arm, so any input yields a descriptor:
//!
//! | tool                 | unknown command           | unknown tool      |
//! |----------------------|---------------------------|-------------------|
//! | `str_replace_editor` | `Edited <file>` / edit    |                   |
//! | `file_manager`       | `Modified <file>` / gear  |                   |
//! | anything else        |                           | raw name / gear   |

use serde::Serialize;

use crate::filename::extract_filename;
use crate::icon::Icon;
use crate::tools::args::ToolArgs;
use crate::tools::tool_name::{EditorCommand, FileManagerCommand, ToolKind};

/// Message and icon for one invocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DisplayDescriptor {
    pub message: String,
    pub icon: Icon,
}

impl DisplayDescriptor {
    pub fn new(message: impl Into<String>, icon: Icon) -> Self {
        Self {
            message: message.into(),
            icon,
        }
    }
}

/// Classify an invocation for display.
///
/// Pure in `(tool_name, args)`: the lifecycle state never influences the
/// message.
pub fn classify(tool_name: &str, args: &ToolArgs) -> DisplayDescriptor {
    match ToolKind::parse(tool_name) {
        Some(ToolKind::Editor) => classify_editor(args),
        Some(ToolKind::FileManager) => classify_file_manager(args),
        None => DisplayDescriptor::new(tool_name, Icon::Settings),
    }
}

fn classify_editor(args: &ToolArgs) -> DisplayDescriptor {
    let filename = extract_filename(args.path());
    let (verb, icon) = match args.command().and_then(EditorCommand::parse) {
        Some(EditorCommand::Create) => ("Created", Icon::Create),
        Some(EditorCommand::StrReplace | EditorCommand::Insert) => ("Updated", Icon::Edit),
        Some(EditorCommand::View) => ("Viewing", Icon::View),
        Some(EditorCommand::UndoEdit) => ("Reverted", Icon::Edit),
        None => ("Edited", Icon::Edit),
    };
    DisplayDescriptor::new(format!("{verb} {filename}"), icon)
}

fn classify_file_manager(args: &ToolArgs) -> DisplayDescriptor {
    let filename = extract_filename(args.path());
    match args.command().and_then(FileManagerCommand::parse) {
        Some(FileManagerCommand::Delete) => {
            DisplayDescriptor::new(format!("Deleted {filename}"), Icon::Delete)
        }
        Some(FileManagerCommand::Rename) => {
            // An empty new_path reads as absent.
            let message = match args.new_path().filter(|p| !p.is_empty()) {
                Some(new_path) => format!(
                    "Renamed {filename} to {}",
                    extract_filename(Some(new_path))
                ),
                None => format!("Renamed {filename}"),
            };
            DisplayDescriptor::new(message, Icon::Move)
        }
        None => DisplayDescriptor::new(format!("Modified {filename}"), Icon::Settings),
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
