//! PixelView: maps a pixel buffer into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Canvas, PixelBuffer};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Rgb, BACKGROUND_COLOR};

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: char = '▀';

const HINT: &str = "wasd/arrows steer  q quits";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Places the display, framed, in the middle of the terminal.
pub struct PixelView {
    show_hint: bool,
}

impl Default for PixelView {
    fn default() -> Self {
        Self { show_hint: true }
    }
}

impl PixelView {
    pub fn with_hint(mut self, show_hint: bool) -> Self {
        self.show_hint = show_hint;
        self
    }

    /// Terminal cells needed for the display itself (no frame).
    pub fn cell_size(pixels: &PixelBuffer) -> (u16, u16) {
        let w = pixels.width().max(0) as u16;
        let h = pixels.height().max(0) as u16;
        (w, h.div_ceil(2))
    }

    /// Render `pixels` into an existing framebuffer sized to `viewport`.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, pixels: &PixelBuffer, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::blank());

        let (inner_w, inner_h) = Self::cell_size(pixels);
        let frame_w = inner_w.saturating_add(2);
        let frame_h = inner_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h.saturating_add(1)) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for cy in 0..inner_h {
            let top_y = (cy as i32) * 2;
            for cx in 0..inner_w {
                let top = pixels.get(cx as i32, top_y).unwrap_or(BACKGROUND_COLOR);
                let bottom = pixels.get(cx as i32, top_y + 1).unwrap_or(BACKGROUND_COLOR);
                fb.put_char(
                    start_x.saturating_add(1 + cx),
                    start_y.saturating_add(1 + cy),
                    HALF_BLOCK,
                    CellStyle::new(top, bottom),
                );
            }
        }

        if self.show_hint {
            let hint_x = viewport.width.saturating_sub(HINT.len() as u16) / 2;
            let dim = CellStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));
            fb.put_str(hint_x, start_y.saturating_add(frame_h), HINT, dim);
        }
    }

    pub fn render(&self, pixels: &PixelBuffer, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(pixels, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}
