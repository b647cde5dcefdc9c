use std::io::Write;

use blake3::Hash;

use crate::cursor;
use crate::error::Result;

/// Renderer runtime parameters.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    pub restore_cursor: Option<(u16, u16)>,
    /// Skip writing a frame identical to the last one written.
    pub skip_unchanged: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            restore_cursor: None,
            skip_unchanged: true,
        }
    }
}

/// ANSI escape code renderer writing whole frames to a terminal handle.
pub struct AnsiRenderer {
    settings: RendererSettings,
    last_frame: Option<Hash>,
}

impl AnsiRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            settings,
            last_frame: None,
        }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    /// Forget the last frame so the next render always writes, e.g. after
    /// the terminal cleared itself on resize.
    pub fn invalidate(&mut self) {
        self.last_frame = None;
    }

    /// Write `lines` from the top-left corner, clearing whatever the previous
    /// frame left behind. Returns `false` when the frame was skipped.
    pub fn render(&mut self, writer: &mut impl Write, lines: &[String]) -> Result<bool> {
        let hash = frame_hash(lines);
        if self.settings.skip_unchanged && self.last_frame == Some(hash) {
            return Ok(false);
        }

        for (offset, line) in lines.iter().enumerate() {
            let row = (offset as u16).saturating_add(1);
            write!(
                writer,
                "{}{}{}{}",
                cursor::move_to(row, 1),
                line,
                cursor::reset_style(),
                cursor::clear_to_line_end()
            )?;
        }
        let below = (lines.len() as u16).saturating_add(1);
        write!(
            writer,
            "{}{}",
            cursor::move_to(below, 1),
            cursor::clear_to_screen_end()
        )?;

        if let Some((row, col)) = self.settings.restore_cursor {
            write!(writer, "{}", cursor::move_to(row + 1, col + 1))?;
        }

        writer.flush()?;
        self.last_frame = Some(hash);
        Ok(true)
    }
}

fn frame_hash(lines: &[String]) -> Hash {
    let mut hasher = blake3::Hasher::new();
    for line in lines {
        hasher.update(line.as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize()
}
