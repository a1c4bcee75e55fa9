//! Character-cell framebuffer the pixel view draws into.

use std::slice::ChunksExact;

use crate::types::{Rgb, BACKGROUND_COLOR};

/// Foreground and background of one cell.
///
/// For half-block pixel cells the foreground is the upper pixel and the
/// background the lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), BACKGROUND_COLOR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    pub fn blank() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

/// Row-major grid of cells sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Change dimensions in place, keeping the allocation when it is big enough.
    ///
    /// Cell contents are unspecified afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::blank());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows top to bottom. Yields nothing for a zero-width buffer.
    pub fn rows(&self) -> ChunksExact<'_, Cell> {
        self.cells.chunks_exact((self.width as usize).max(1))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write one cell; positions off the buffer are dropped.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = Cell::new(ch, style);
        }
    }

    /// Write `s` left to right from `(x, y)`, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.put_char(cx, y, ch, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_off_the_buffer_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 0, 'x', CellStyle::default());
        fb.put_char(0, 2, 'x', CellStyle::default());
        assert_eq!(fb.get(5, 0), None);
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(1, 0, "abc", CellStyle::default());
        let row: String = fb.cells().iter().map(|c| c.ch).collect();
        assert_eq!(row, " ab");
    }

    #[test]
    fn rows_follow_resize() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(4, 3);
        assert_eq!(fb.cells().len(), 12);
        assert_eq!(fb.rows().count(), 3);
        assert!(fb.rows().all(|r| r.len() == 4));

        fb.resize(0, 3);
        assert_eq!(fb.rows().count(), 0);
    }
}
