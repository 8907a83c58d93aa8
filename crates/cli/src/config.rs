// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Renderer configuration loaded from TOML or JSON files.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::render::GlyphSet;

/// Smallest accepted `max_width`; leaves room for a glyph and an ellipsis.
pub const MIN_MAX_WIDTH: usize = 8;

/// Errors that can occur when loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// When to emit ANSI colors.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a yes/no decision.
    pub fn enabled(self, is_tty: bool, no_color: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_tty && !no_color,
        }
    }
}

fn default_show_title() -> bool {
    true
}

/// Renderer settings from a config file
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BadgeConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub glyphs: GlyphSet,

    /// Append the raw path to each badge line (default: true)
    #[serde(default = "default_show_title")]
    pub show_title: bool,

    /// Truncate badge lines to this display width
    #[serde(default)]
    pub max_width: Option<usize>,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            glyphs: GlyphSet::Unicode,
            show_title: true,
            max_width: None,
        }
    }
}

impl BadgeConfig {
    /// Load a config file, JSON when the extension says so and TOML otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: BadgeConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_max_width(self.max_width)
    }
}

pub fn validate_max_width(max_width: Option<usize>) -> Result<(), ConfigError> {
    match max_width {
        Some(width) if width < MIN_MAX_WIDTH => Err(ConfigError::Validation(format!(
            "Invalid max_width {}: must be at least {}",
            width, MIN_MAX_WIDTH
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
