//! Snake module - the fixed-length segment chain
//!
//! Segments are stored inline (no heap) with the head at index 0. Movement is
//! follow-the-leader: every segment takes its predecessor's previous cell, then
//! the head steps once along the heading.

use arrayvec::ArrayVec;

use crate::types::{Direction, Segment, MAX_SNAKE_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: ArrayVec<Segment, MAX_SNAKE_LENGTH>,
}

impl Snake {
    /// Straight snake with its head at `head`, trailing away from `heading`.
    ///
    /// Returns `None` for an empty snake or one longer than [`MAX_SNAKE_LENGTH`].
    pub fn new(head: Segment, heading: Direction, length: usize) -> Option<Self> {
        if length == 0 || length > MAX_SNAKE_LENGTH {
            return None;
        }
        let trail = heading.opposite();
        let segments = (0..length as i32)
            .map(|i| head.translated(trail, i))
            .collect();
        Some(Self { segments })
    }

    /// Snake from explicit cells, head first.
    pub fn from_segments<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut segments = ArrayVec::new();
        for cell in cells {
            segments.try_push(cell).ok()?;
        }
        if segments.is_empty() {
            return None;
        }
        Some(Self { segments })
    }

    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segments behind the head.
    pub fn body(&self) -> &[Segment] {
        &self.segments[1..]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Advance one cell along `heading`.
    pub fn shift(&mut self, heading: Direction) {
        // Tail first, so each predecessor is read before it is overwritten.
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0].translate(heading, 1);
    }

    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body().iter().any(|&seg| seg == head)
    }
}
