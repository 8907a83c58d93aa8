// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output format handling for text, JSON, and streaming JSON modes.

use std::io::Write;

use crate::cli::OutputFormat;
use crate::render::{render_line, BadgeView, RenderOptions};

/// Output writer that handles different formats
///
/// Text and stream-json write each badge as it arrives. JSON buffers until
/// [`OutputWriter::finish`] so the array is emitted in one piece.
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    options: RenderOptions,
    pending: Vec<BadgeView>,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer
    pub fn new(writer: W, format: OutputFormat, options: RenderOptions) -> Self {
        Self {
            writer,
            format,
            options,
            pending: Vec::new(),
        }
    }

    /// Write a badge in the configured format
    pub fn write_badge(&mut self, view: BadgeView) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(&view),
            OutputFormat::Json => {
                self.pending.push(view);
                Ok(())
            }
            OutputFormat::StreamJson => self.write_stream_json(&view),
        }
    }

    /// Flush buffered output and return the underlying writer.
    pub fn finish(mut self) -> std::io::Result<W> {
        if self.format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(&self.pending)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            writeln!(self.writer, "{}", json)?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_text(&mut self, view: &BadgeView) -> std::io::Result<()> {
        writeln!(self.writer, "{}", render_line(view, &self.options))?;
        // Live status: each badge shows up as soon as it is classified.
        self.writer.flush()
    }

    fn write_stream_json(&mut self, view: &BadgeView) -> std::io::Result<()> {
        let json = serde_json::to_string(view)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
