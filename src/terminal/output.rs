//! Box-drawn widget output.
//!
//! Everything writes to a caller-supplied writer with `\r\n` line endings,
//! so it renders correctly in raw mode and can be captured in tests.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Move to top-left and clear the screen below.
pub fn home(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\x1b[H\x1b[J")
}

// ============================================================================
// Box Drawing (72 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 72;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ──────────┐
pub fn box_top(out: &mut impl Write, title: &str) -> io::Result<()> {
    if title.is_empty() {
        write!(out, "┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        write!(out, "┌{}{}┐\r\n", title_part, "─".repeat(remaining))
    }
}

/// │ content          │
pub fn box_line(out: &mut impl Write, content: &str) -> io::Result<()> {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    write!(out, "│ {}{} │\r\n", content, " ".repeat(padding))
}

/// │     content      │
pub fn box_line_center(out: &mut impl Write, content: &str) -> io::Result<()> {
    let total = INNER_WIDTH.saturating_sub(console_width(content));
    let left = total / 2;
    write!(
        out,
        "│ {}{}{} │\r\n",
        " ".repeat(left),
        content,
        " ".repeat(total - left)
    )
}

/// ├──────────────────┤
pub fn box_rule(out: &mut impl Write) -> io::Result<()> {
    write!(out, "├{}┤\r\n", "─".repeat(BOX_WIDTH - 2))
}

/// └──────────────────┘
pub fn box_bottom(out: &mut impl Write) -> io::Result<()> {
    write!(out, "└{}┘\r\n", "─".repeat(BOX_WIDTH - 2))
}

/// Slider track with the knob at `value` within `[min, max]`.
pub fn slider(value: usize, min: usize, max: usize, width: usize) -> String {
    let span = max.saturating_sub(min).max(1);
    let pos = (value.saturating_sub(min) * (width - 1)) / span;
    (0..width)
        .map(|i| if i == pos { '●' } else { '─' })
        .collect()
}

/// Display width ignoring ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
