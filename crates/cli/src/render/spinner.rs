// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spinner frames shown in place of the icon while a call is in flight.

use super::GlyphSet;

/// Spinner animation frames (platform-aware)
pub fn spinner_frames(glyphs: GlyphSet) -> &'static [&'static str] {
    match glyphs {
        GlyphSet::Ascii => &["-", "\\", "|", "/"],
        GlyphSet::Unicode if cfg!(target_os = "macos") => &["·", "✢", "✳", "✶", "✻", "✽"],
        GlyphSet::Unicode => &["·", "✢", "*", "✶", "✻", "✽"],
    }
}

/// Full animation cycle.
///
/// Unicode frames breathe (forward then reverse without the endpoints);
/// ASCII frames already form a rotation and are used as-is.
pub fn spinner_cycle(glyphs: GlyphSet) -> Vec<&'static str> {
    let frames = spinner_frames(glyphs);
    let mut cycle: Vec<&str> = frames.to_vec();
    if glyphs == GlyphSet::Unicode {
        cycle.extend(frames.iter().rev().skip(1).take(frames.len() - 2));
    }
    cycle
}

/// Frame for a render tick, wrapping around the cycle.
pub fn spinner_frame(glyphs: GlyphSet, tick: usize) -> &'static str {
    let cycle = spinner_cycle(glyphs);
    cycle[tick % cycle.len()]
}

#[cfg(test)]
#[path = "spinner_tests.rs"]
mod tests;
