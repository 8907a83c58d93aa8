// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use serde_json::json;

#[test]
fn extract_str_returns_string_fields() {
    let input = json!({ "command": "view", "path": "src/App.tsx" });
    assert_eq!(extract_str(&input, "command"), Some("view"));
    assert_eq!(extract_str(&input, "path"), Some("src/App.tsx"));
    assert_eq!(extract_str(&input, "new_path"), None);
}

#[test]
fn extract_str_ignores_non_strings() {
    let input = json!({ "path": 42, "command": null, "new_path": ["a"] });
    assert_eq!(extract_str(&input, "path"), None);
    assert_eq!(extract_str(&input, "command"), None);
    assert_eq!(extract_str(&input, "new_path"), None);
}

#[test]
fn from_value_reads_known_keys_only() {
    let args = ToolArgs::from_value(&json!({
        "command": "rename",
        "path": "a/Header.tsx",
        "new_path": "a/Navbar.tsx",
        "file_text": "export default 1",
        "view_range": [1, 10]
    }));
    assert_eq!(
        args,
        ToolArgs::new()
            .with_command("rename")
            .with_path("a/Header.tsx")
            .with_new_path("a/Navbar.tsx")
    );
}

#[test]
fn from_value_on_non_object_is_empty() {
    assert_eq!(ToolArgs::from_value(&json!(null)), ToolArgs::default());
    assert_eq!(ToolArgs::from_value(&json!("create")), ToolArgs::default());
    assert_eq!(ToolArgs::from_value(&json!([1, 2])), ToolArgs::default());
}

#[test]
fn deserialize_tolerates_missing_and_mistyped_keys() {
    let args: ToolArgs =
        serde_json::from_value(json!({ "command": 7, "path": "x.rs", "extra": true })).unwrap();
    assert_eq!(args.command(), None);
    assert_eq!(args.path(), Some("x.rs"));
    assert_eq!(args.new_path(), None);

    let empty: ToolArgs = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty, ToolArgs::default());
}

#[test]
fn serialize_skips_absent_keys() {
    let args = ToolArgs::new().with_path("App.tsx");
    assert_eq!(
        serde_json::to_value(&args).unwrap(),
        json!({ "path": "App.tsx" })
    );
}
