// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Config file discovery and layering through the binary.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn toolbadge() -> Command {
    let mut cmd = Command::cargo_bin("toolbadge").unwrap();
    cmd.env_remove("TOOLBADGE_COLOR")
        .env_remove("TOOLBADGE_CONFIG")
        .env_remove("NO_COLOR");
    cmd
}

fn write_config(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const VIEW: &str = r#"{"toolName":"str_replace_editor","args":{"command":"view","path":"src/lib.rs"},"state":"result"}"#;

#[test]
fn test_toml_config_applies() {
    let config = write_config(
        r#"
        color = "never"
        glyphs = "ascii"
        show_title = false
        "#,
        ".toml",
    );
    toolbadge()
        .arg("--config")
        .arg(config.path())
        .write_stdin(VIEW)
        .assert()
        .success()
        .stdout("o Viewing lib.rs\n");
}

#[test]
fn test_json_config_by_extension() {
    let config = write_config(r#"{"color":"never","glyphs":"ascii"}"#, ".json");
    toolbadge()
        .arg("--config")
        .arg(config.path())
        .write_stdin(VIEW)
        .assert()
        .success()
        .stdout("o Viewing lib.rs  (src/lib.rs)\n");
}

#[test]
fn test_config_from_env_var() {
    let config = write_config("color = \"never\"\nglyphs = \"ascii\"\n", ".toml");
    toolbadge()
        .env("TOOLBADGE_CONFIG", config.path())
        .arg("--no-title")
        .write_stdin(VIEW)
        .assert()
        .success()
        .stdout("o Viewing lib.rs\n");
}

#[test]
fn test_flags_override_config() {
    let config = write_config("color = \"always\"\nshow_title = true\n", ".toml");
    toolbadge()
        .arg("--config")
        .arg(config.path())
        .args(["--color", "never", "--ascii", "--no-title"])
        .write_stdin(VIEW)
        .assert()
        .success()
        .stdout("o Viewing lib.rs\n");
}

#[test]
fn test_env_color_overrides_config() {
    let config = write_config("color = \"always\"\nglyphs = \"ascii\"\n", ".toml");
    toolbadge()
        .env("TOOLBADGE_COLOR", "never")
        .arg("--config")
        .arg(config.path())
        .write_stdin(VIEW)
        .assert()
        .success()
        .stdout("o Viewing lib.rs  (src/lib.rs)\n");
}

#[test]
fn test_unknown_config_field_rejected() {
    let config = write_config("colour = \"never\"\n", ".toml");
    toolbadge()
        .arg("--config")
        .arg(config.path())
        .write_stdin(VIEW)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("colour").or(predicate::str::contains("unknown field")));
}

#[test]
fn test_config_max_width_validated() {
    let config = write_config("max_width = 2\n", ".toml");
    toolbadge()
        .arg("--config")
        .arg(config.path())
        .write_stdin(VIEW)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 8"));
}

#[test]
fn test_missing_config_file() {
    toolbadge()
        .args(["--config", "no/such/badge.toml"])
        .write_stdin(VIEW)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
