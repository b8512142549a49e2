//! Formatting utilities used for CLI outputs.

use ansi_term::Style;

const EMPTY_CELL: &str = "--:--:--";

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Blank log fields are shown as a placeholder instead of a gap.
pub fn or_placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        EMPTY_CELL.to_string()
    } else {
        value.to_string()
    }
}
