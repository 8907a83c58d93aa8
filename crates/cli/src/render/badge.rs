// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Badge projection of a tool invocation and its one-line terminal form.

use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::colors::{self, styled, styled_dim};
use super::spinner::spinner_frame;
use super::{GlyphSet, RenderOptions};
use crate::classify::{classify, DisplayDescriptor};
use crate::icon::Icon;
use crate::invocation::ToolInvocation;
use crate::lifecycle::{select_treatment, Treatment};

const ELLIPSIS: &str = "...";

/// Everything a renderer needs to draw one badge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub tool_call_id: String,
    pub message: String,
    pub icon: Icon,
    pub busy: bool,
    /// Raw `path` argument, empty when absent.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    pub aria_label: String,
}

impl BadgeView {
    pub fn new(
        tool_call_id: impl Into<String>,
        descriptor: DisplayDescriptor,
        treatment: Treatment,
        title: impl Into<String>,
    ) -> Self {
        let aria_label = treatment.accessible_label(&descriptor.message);
        Self {
            tool_call_id: tool_call_id.into(),
            message: descriptor.message,
            icon: descriptor.icon,
            busy: treatment.busy,
            title: title.into(),
            role: treatment.role(),
            aria_label,
        }
    }

    /// Classify and apply the lifecycle treatment in one step.
    pub fn from_invocation(invocation: &ToolInvocation) -> Self {
        Self::new(
            invocation.tool_call_id.as_str(),
            classify(&invocation.tool_name, &invocation.args),
            select_treatment(invocation.state),
            invocation.args.path().unwrap_or_default(),
        )
    }

    /// Glyph for the icon slot: a spinner frame while busy.
    pub fn glyph(&self, glyphs: GlyphSet, tick: usize) -> &'static str {
        if self.busy {
            spinner_frame(glyphs, tick)
        } else {
            match glyphs {
                GlyphSet::Unicode => self.icon.glyph(),
                GlyphSet::Ascii => self.icon.ascii_glyph(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SegmentStyle {
    Plain,
    Icon,
    Message,
    Title,
}

#[derive(Clone, Debug)]
struct Segment {
    text: String,
    style: SegmentStyle,
}

impl Segment {
    fn new(text: impl Into<String>, style: SegmentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Render a badge as a single terminal line (no trailing newline).
///
/// Plain layout: `<glyph> <message>  (<title>)`, the title part only when
/// enabled and non-empty.
pub fn render_line(view: &BadgeView, options: &RenderOptions) -> String {
    let mut segments = vec![
        Segment::new(view.glyph(options.glyphs, options.tick), SegmentStyle::Icon),
        Segment::new(" ", SegmentStyle::Plain),
        Segment::new(view.message.as_str(), SegmentStyle::Message),
    ];
    if options.show_title && !view.title.is_empty() {
        segments.push(Segment::new(
            format!("  ({})", view.title),
            SegmentStyle::Title,
        ));
    }

    if let Some(max_width) = options.max_width {
        segments = truncate_segments(segments, max_width);
    }

    segments
        .iter()
        .map(|segment| paint(segment, view.busy, options.color))
        .collect()
}

fn paint(segment: &Segment, busy: bool, color: bool) -> String {
    if !color {
        return segment.text.clone();
    }
    match (segment.style, busy) {
        (SegmentStyle::Plain, _) => segment.text.clone(),
        (SegmentStyle::Icon, true) => styled(&segment.text, colors::SPINNER),
        (SegmentStyle::Icon, false) => styled(&segment.text, colors::DONE_ICON),
        (SegmentStyle::Message, true) => styled(&segment.text, colors::BUSY_TEXT),
        (SegmentStyle::Message, false) => styled(&segment.text, colors::DONE_TEXT),
        (SegmentStyle::Title, _) => styled_dim(&segment.text),
    }
}

/// Cut segments down to `max_width` display cells, ending in `...`.
fn truncate_segments(segments: Vec<Segment>, max_width: usize) -> Vec<Segment> {
    let total: usize = segments.iter().map(|s| s.text.width()).sum();
    if total <= max_width {
        return segments;
    }

    let mut budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len() + 1);
    'outer: for segment in segments {
        let mut text = String::new();
        for ch in segment.text.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if ch_width > budget {
                if !text.is_empty() {
                    out.push(Segment::new(text, segment.style));
                }
                break 'outer;
            }
            text.push(ch);
            budget -= ch_width;
        }
        out.push(Segment::new(text, segment.style));
    }

    let style = out
        .last()
        .map(|s| s.style)
        .unwrap_or(SegmentStyle::Plain);
    out.push(Segment::new(ELLIPSIS, style));
    out
}

#[cfg(test)]
#[path = "badge_tests.rs"]
mod tests;
