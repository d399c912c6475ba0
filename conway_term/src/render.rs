// render.rs - Drawing generations with cursor-positioning escape sequences

use std::io::{self, Write};

use sparse_life::{Cell, Generation, Render};

pub const LIVE_GLYPH: &str = "██";
const CLEAR: &str = "\x1b[H\x1b[2J";

/// Window onto the plane. Each cell is two terminal columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub origin_x: i64, // plane x of the left-most column
    pub origin_y: i64, // plane y of the top row
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// 1-based `(row, column)` of a cell, or `None` if it is clipped.
    pub fn screen_position(&self, cell: Cell) -> Option<(u32, u32)> {
        let dx = cell.x.checked_sub(self.origin_x)?;
        let dy = cell.y.checked_sub(self.origin_y)?;
        if !(0..i64::from(self.width)).contains(&dx) || !(0..i64::from(self.height)).contains(&dy) {
            return None;
        }
        Some((dy as u32 + 1, 2 * dx as u32 + 1))
    }

    /// One complete frame: clear, every visible cell, then a status line
    /// below the viewport.
    pub fn frame(&self, number: u64, generation: &Generation) -> String {
        let mut out = String::from(CLEAR);
        let mut shown = 0usize;
        for cell in generation.sorted() {
            if let Some((row, col)) = self.screen_position(cell) {
                out.push_str(&format!("\x1b[{row};{col}H{LIVE_GLYPH}"));
                shown += 1;
            }
        }
        out.push_str(&format!(
            "\x1b[{};1Hgeneration {number}  population {}  visible {shown}",
            u32::from(self.height) + 2,
            generation.len(),
        ));
        out
    }
}

/// Writes each frame to `out` and flushes.
pub struct TerminalRenderer<W: Write> {
    out: W,
    viewport: Viewport,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, viewport: Viewport) -> Self {
        Self { out, viewport }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, number: u64, generation: &Generation) -> io::Result<()> {
        self.out.write_all(self.viewport.frame(number, generation).as_bytes())?;
        self.out.flush()
    }
}
