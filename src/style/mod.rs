//! Fixed rendering parameters for counter boxes.
//!
//! A box renders as a block of lines: `margin_top` blank lines, then the
//! colored body (`padding` rows above and below the content, `padding`
//! columns either side), each line prefixed by `margin_left` blank cells.
//! `width` covers the body including padding but not the margins.

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthChar;

use crate::width::{block_width, display_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxStyle {
    pub width: u16,
    pub padding: u16,
    pub margin_top: u16,
    pub margin_left: u16,
    pub align: Align,
    pub bold: bool,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            width: 20,
            padding: 2,
            margin_top: 1,
            margin_left: 2,
            align: Align::Center,
            bold: true,
            foreground: Some(Color::Rgb {
                r: 0xFA,
                g: 0xFA,
                b: 0xFA,
            }),
            background: Some(Color::Rgb {
                r: 0x7D,
                g: 0x56,
                b: 0xF4,
            }),
        }
    }
}

/// Rendered lines of one box plus their measured extent (margins included).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBlock {
    pub lines: Vec<String>,
    pub width: u16,
    pub height: u16,
}

impl RenderedBlock {
    pub fn from_lines(lines: Vec<String>) -> Self {
        let width = clamp_u16(block_width(&lines));
        let height = clamp_u16(lines.len());
        Self {
            lines,
            width,
            height,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl BoxStyle {
    /// Same geometry as the default style without any escape sequences.
    pub fn plain() -> Self {
        Self {
            bold: false,
            foreground: None,
            background: None,
            ..Self::default()
        }
    }

    /// Width available to content inside the padding.
    pub fn inner_width(&self) -> u16 {
        self.width.saturating_sub(self.padding.saturating_mul(2))
    }

    pub fn render(&self, text: &str) -> RenderedBlock {
        let inner = self.inner_width();
        let margin = " ".repeat(self.margin_left as usize);
        let blank_body = " ".repeat(self.width as usize);
        let side = " ".repeat(self.padding as usize);

        let mut lines = Vec::new();
        for _ in 0..self.margin_top {
            lines.push(format!("{margin}{blank_body}"));
        }
        for _ in 0..self.padding {
            lines.push(format!("{margin}{}", self.paint(&blank_body)));
        }
        for line in wrap_to_width(text, inner) {
            let body = format!("{side}{}{side}", self.align_line(&line, inner));
            lines.push(format!("{margin}{}", self.paint(&body)));
        }
        for _ in 0..self.padding {
            lines.push(format!("{margin}{}", self.paint(&blank_body)));
        }

        RenderedBlock::from_lines(lines)
    }

    fn align_line(&self, line: &str, width: u16) -> String {
        let used = display_width(line);
        let free = (width as usize).saturating_sub(used);
        let (left, right) = match self.align {
            Align::Left => (0, free),
            Align::Right => (free, 0),
            Align::Center => (free / 2, free - free / 2),
        };
        format!("{}{line}{}", " ".repeat(left), " ".repeat(right))
    }

    fn paint(&self, segment: &str) -> String {
        if self.foreground.is_none() && self.background.is_none() && !self.bold {
            return segment.to_string();
        }
        let mut styled = segment.stylize();
        if let Some(color) = self.foreground {
            styled = styled.with(color);
        }
        if let Some(color) = self.background {
            styled = styled.on(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}

fn clamp_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}

/// Hard-wrap `content` at `width` display cells, dropping leading spaces
/// on continuation lines.
fn wrap_to_width(content: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for raw in content.split('\n') {
        if raw.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut continuation = false;
        for ch in raw.chars() {
            if current.is_empty() && ch == ' ' && continuation {
                continue;
            }
            current.push(ch);
            let display = display_width(&current) as u16;
            if display > width {
                current.pop();
                if !current.is_empty() {
                    lines.push(current.trim_end().to_string());
                    continuation = true;
                }
                current.clear();
                let glyph = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
                if ch != ' ' && glyph <= width {
                    current.push(ch);
                }
            } else if display == width {
                lines.push(std::mem::take(&mut current));
                continuation = true;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
