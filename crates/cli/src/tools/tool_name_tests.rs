// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn tool_kind_as_str_returns_wire_name() {
    assert_eq!(ToolKind::Editor.as_str(), "str_replace_editor");
    assert_eq!(ToolKind::FileManager.as_str(), "file_manager");
}

#[test]
fn tool_kind_parse_returns_none_for_unknown() {
    assert_eq!(ToolKind::parse("unknown_tool"), None);
    assert_eq!(ToolKind::parse("File_Manager"), None);
    assert_eq!(ToolKind::parse(" file_manager"), None);
    assert_eq!(ToolKind::parse(""), None);
}

#[test]
fn display_impl() {
    assert_eq!(format!("{}", ToolKind::Editor), "str_replace_editor");
    assert_eq!(format!("{}", ToolKind::FileManager), "file_manager");
}

#[test]
fn roundtrip_all_variants() {
    for kind in [ToolKind::Editor, ToolKind::FileManager] {
        assert_eq!(ToolKind::parse(kind.as_str()), Some(kind));
    }

    let editor = [
        EditorCommand::Create,
        EditorCommand::StrReplace,
        EditorCommand::Insert,
        EditorCommand::View,
        EditorCommand::UndoEdit,
    ];
    for command in editor {
        assert_eq!(EditorCommand::parse(command.as_str()), Some(command));
    }

    for command in [FileManagerCommand::Delete, FileManagerCommand::Rename] {
        assert_eq!(FileManagerCommand::parse(command.as_str()), Some(command));
    }
}

#[test]
fn commands_do_not_cross_families() {
    assert_eq!(EditorCommand::parse("delete"), None);
    assert_eq!(EditorCommand::parse("rename"), None);
    assert_eq!(FileManagerCommand::parse("create"), None);
    assert_eq!(FileManagerCommand::parse("view"), None);
}

#[test]
fn command_parse_is_case_sensitive() {
    assert_eq!(EditorCommand::parse("Create"), None);
    assert_eq!(FileManagerCommand::parse("DELETE"), None);
}
