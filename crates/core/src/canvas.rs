//! Canvas module - the pixel surface the game draws on
//!
//! The game never talks to a display directly. It describes each frame as a
//! list of [`DrawCommand`]s and applies them to anything implementing
//! [`Canvas`]. [`PixelBuffer`] is the in-memory implementation shared by the
//! terminal backend and the tests.

use crate::types::{Rgb, BACKGROUND_COLOR};

/// A writable RGB pixel surface.
///
/// Coordinates are integer pixels with the origin at the top-left corner.
/// Writes outside `0..width` x `0..height` are ignored.
pub trait Canvas {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb);

    fn fill(&mut self, color: Rgb);

    /// Reset every pixel to the background color.
    fn clear(&mut self) {
        self.fill(BACKGROUND_COLOR);
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        (**self).set_pixel(x, y, color);
    }

    fn fill(&mut self, color: Rgb) {
        (**self).fill(color);
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}

/// One primitive of a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Axis-aligned filled square with its top-left corner at `(x, y)`.
    FillSquare { x: i32, y: i32, size: i32, color: Rgb },
}

impl DrawCommand {
    pub fn apply<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match *self {
            DrawCommand::FillSquare { x, y, size, color } => {
                for dy in 0..size {
                    for dx in 0..size {
                        canvas.set_pixel(x + dx, y + dy, color);
                    }
                }
            }
        }
    }
}

/// Row-major RGB pixel storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![BACKGROUND_COLOR; len],
        }
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Number of pixels not equal to the background color.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != BACKGROUND_COLOR).count()
    }
}

impl Canvas for PixelBuffer {
    fn width(&self) -> i32 {
        self.width as i32
    }

    fn height(&self) -> i32 {
        self.height as i32
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }
}
