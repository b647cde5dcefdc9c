//! Terminal cursor utility helpers for composing ANSI sequences.
//!
//! The renderer positions every frame line absolutely, so these helpers stay
//! limited to absolute moves and clears.

const CSI: &str = "\x1b[";

/// Move the cursor to an absolute 1-based `row` and `column`.
pub fn move_to(row: u16, column: u16) -> String {
    format!("{CSI}{row};{column}H")
}

/// Clear from the cursor to the end of the line.
pub fn clear_to_line_end() -> &'static str {
    "\x1b[K"
}

/// Clear from the cursor to the end of the screen.
pub fn clear_to_screen_end() -> &'static str {
    "\x1b[J"
}

/// Reset colors and attributes so clears use the default background.
pub fn reset_style() -> &'static str {
    "\x1b[0m"
}
