//! TerminalCanvas: the game's pixel display, shown in a terminal.

use anyhow::Result;

use crate::core::{Canvas, PixelBuffer};
use crate::engine::Display;
use crate::fb::FrameBuffer;
use crate::pixel_view::{PixelView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::Rgb;

pub struct TerminalCanvas {
    pixels: PixelBuffer,
    view: PixelView,
    fb: FrameBuffer,
    renderer: TerminalRenderer,
    viewport: Option<Viewport>,
}

impl TerminalCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            pixels: PixelBuffer::new(width, height),
            view: PixelView::default(),
            fb: FrameBuffer::new(0, 0),
            renderer: TerminalRenderer::new(),
            viewport: None,
        }
    }

    /// Take over the terminal (raw mode, alternate screen).
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Give the terminal back.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Canvas for TerminalCanvas {
    fn width(&self) -> i32 {
        self.pixels.width()
    }

    fn height(&self) -> i32 {
        self.pixels.height()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        self.pixels.set_pixel(x, y, color);
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }
}

impl Display for TerminalCanvas {
    fn present(&mut self) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if self.viewport != Some(viewport) {
            self.renderer.invalidate();
            self.viewport = Some(viewport);
        }
        self.view.render_into(&self.pixels, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
