// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal and JSON rendering of classified invocations.

pub mod badge;
pub mod colors;
pub mod spinner;

pub use badge::{render_line, BadgeView};

use serde::{Deserialize, Serialize};

/// Glyph repertoire for icons and spinner frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Unicode,
    Ascii,
}

/// Options for rendering one badge line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit 24-bit ANSI colors.
    pub color: bool,
    pub glyphs: GlyphSet,
    /// Append the raw path after the message.
    pub show_title: bool,
    /// Truncate to this display width.
    pub max_width: Option<usize>,
    /// Spinner frame index for in-progress badges.
    pub tick: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: false,
            glyphs: GlyphSet::Unicode,
            show_title: true,
            max_width: None,
            tick: 0,
        }
    }
}
