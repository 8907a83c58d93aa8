// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{validate_max_width, ColorMode};

/// Render status badges for assistant tool invocations
#[derive(Parser, Clone, Debug)]
#[command(name = "toolbadge", version, about = "Render status badges for tool invocations")]
pub struct Cli {
    /// Invocation records to render (`-` or omitted reads stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input format
    #[arg(long, value_enum, default_value = "json")]
    pub input_format: InputFormat,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// When to color text output
    #[arg(long, value_enum, env = "TOOLBADGE_COLOR")]
    pub color: Option<ColorMode>,

    /// Use ASCII glyphs for icons and spinner
    #[arg(long)]
    pub ascii: bool,

    /// Spinner frame index for in-progress badges
    #[arg(long, default_value_t = 0)]
    pub tick: usize,

    /// Do not append the raw path to badge lines
    #[arg(long)]
    pub no_title: bool,

    /// Truncate badge lines to this display width
    #[arg(long, value_name = "COLUMNS")]
    pub max_width: Option<usize>,

    /// Config file (TOML, or JSON by extension); falls back to TOOLBADGE_CONFIG
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report progress on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Validate argument combinations clap cannot express.
    pub fn validate(&self) -> Result<(), String> {
        validate_max_width(self.max_width).map_err(|e| e.to_string())
    }

    /// Text-only flags given alongside a JSON output format.
    pub fn ignored_render_flags(&self) -> Vec<&'static str> {
        if self.output_format == OutputFormat::Text {
            return Vec::new();
        }
        let mut flags = Vec::new();
        if self.ascii {
            flags.push("--ascii");
        }
        if self.tick != 0 {
            flags.push("--tick");
        }
        if self.no_title {
            flags.push("--no-title");
        }
        if self.max_width.is_some() {
            flags.push("--max-width");
        }
        flags
    }

    /// Input path, `None` when reading stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

/// Input record framing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// A single invocation object or an array of them
    #[default]
    Json,
    /// One invocation object per line
    #[value(name = "stream-json")]
    StreamJson,
}

/// Output format for badges
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One rendered badge line per invocation
    #[default]
    Text,
    /// Pretty JSON array of badge views
    Json,
    /// One compact badge view per line
    #[value(name = "stream-json")]
    StreamJson,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
