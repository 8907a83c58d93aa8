// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool identities and the argument subset the classifier reads.
//!
//! ```
//! use toolbadge::tools::args::ToolArgs;
//! use toolbadge::tools::tool_name::{EditorCommand, ToolKind};
//!
//! assert_eq!(ToolKind::parse("str_replace_editor"), Some(ToolKind::Editor));
//! assert_eq!(EditorCommand::parse("undo_edit"), Some(EditorCommand::UndoEdit));
//!
//! let args = ToolArgs::from_value(&serde_json::json!({ "path": 7, "command": "view" }));
//! assert_eq!(args.command(), Some("view"));
//! assert_eq!(args.path(), None);
//! ```

pub mod args;
pub mod tool_name;
