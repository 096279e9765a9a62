// Rust guideline compliant 2026-10-14

//! Terminal UI utilities for the Stacks CLI.
//!
//! This module provides color detection and colored text rendering.

use std::env;
use std::io::Write;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Renders `text` in `color`, or unchanged when color is disabled.
///
/// # Arguments
/// * `text` - The text to render
/// * `color` - Foreground color
/// * `bold` - Whether to use bold text
/// * `use_color` - Whether to emit ANSI escape codes
pub fn paint(text: &str, color: Color, bold: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }

    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(buffer, "{}", text);
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}
