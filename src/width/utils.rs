//! Terminal display width helpers.
//!
//! Box blocks carry color and bold escapes, so every width measurement done
//! by the style, compositor and layout goes through here.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Widest line of a multi-line block, in display cells.
pub fn block_width(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| display_width(line))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_do_not_count_towards_width() {
        assert_eq!(display_width("\x1b[1mbold\x1b[0m"), 4);
    }

    #[test]
    fn wide_glyphs_take_two_cells() {
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn block_width_takes_the_widest_line() {
        let lines = vec!["ab".to_string(), "abcd".to_string(), String::new()];
        assert_eq!(block_width(&lines), 4);
        assert_eq!(block_width(&[]), 0);
    }
}
