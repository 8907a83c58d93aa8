// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Badge color definitions and styled text helpers.

/// Blue for in-progress badge text: RGB(29, 78, 216)
pub const BUSY_TEXT: (u8, u8, u8) = (29, 78, 216);

/// Blue for the spinner: RGB(37, 99, 235)
pub const SPINNER: (u8, u8, u8) = (37, 99, 235);

/// Neutral gray for completed badge text: RGB(64, 64, 64)
pub const DONE_TEXT: (u8, u8, u8) = (64, 64, 64);

/// Emerald for the completed icon: RGB(5, 150, 105)
pub const DONE_ICON: (u8, u8, u8) = (5, 150, 105);

/// Gray for the raw path title: RGB(153, 153, 153)
pub const TITLE_GRAY: (u8, u8, u8) = (153, 153, 153);

/// ANSI escape sequence helpers (public for reuse)
pub mod escape {
    /// 24-bit foreground color
    pub fn fg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";

    /// Dim
    pub const DIM: &str = "\x1b[2m";
}

/// Wrap text in a 24-bit foreground color followed by a reset.
pub fn styled(text: &str, (r, g, b): (u8, u8, u8)) -> String {
    format!("{}{}{}", escape::fg(r, g, b), text, escape::RESET)
}

/// Dim gray text for secondary information.
///
/// Example output:
/// `[dim][gray]  (src/App.tsx)[reset]`
pub fn styled_dim(text: &str) -> String {
    let (r, g, b) = TITLE_GRAY;
    format!(
        "{dim}{fg_gray}{text}{reset}",
        dim = escape::DIM,
        fg_gray = escape::fg(r, g, b),
        reset = escape::RESET,
    )
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
