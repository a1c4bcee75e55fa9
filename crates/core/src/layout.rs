//! Layout module - grid geometry on top of a pixel display
//!
//! A cell `(x, y)` is drawn as a `segment_size` square whose top-left pixel is
//! `(x * segment_size, y * segment_size)`. The drawable interior excludes a
//! margin one segment wide along every edge; a head outside it is dead.

use crate::canvas::Canvas;
use crate::types::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: i32,
    height: i32,
    segment_size: i32,
}

impl Layout {
    /// Geometry for a `width` x `height` pixel display.
    pub fn new(width: i32, height: i32, segment_size: i32) -> Self {
        Self {
            width,
            height,
            segment_size,
        }
    }

    pub fn from_canvas<C: Canvas + ?Sized>(canvas: &C, segment_size: i32) -> Self {
        Self::new(canvas.width(), canvas.height(), segment_size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn segment_size(&self) -> i32 {
        self.segment_size
    }

    /// Grid columns that fit on the display.
    pub fn cols(&self) -> i32 {
        if self.segment_size <= 0 {
            return 0;
        }
        self.width / self.segment_size
    }

    /// Grid rows that fit on the display.
    pub fn rows(&self) -> i32 {
        if self.segment_size <= 0 {
            return 0;
        }
        self.height / self.segment_size
    }

    /// Logical center cell, where a new snake's head spawns.
    pub fn center(&self) -> Segment {
        Segment::new(self.cols() / 2, self.rows() / 2)
    }

    /// Top-left pixel of a cell.
    #[inline(always)]
    pub fn to_pixel(&self, seg: Segment) -> (i32, i32) {
        (seg.x * self.segment_size, seg.y * self.segment_size)
    }

    /// Whether a cell lies fully inside the drawable interior.
    pub fn in_interior(&self, seg: Segment) -> bool {
        let s = self.segment_size;
        let (px, py) = self.to_pixel(seg);
        px >= s && py >= s && px + s <= self.width - s && py + s <= self.height - s
    }
}
