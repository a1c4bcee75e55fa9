//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, input sampling, terminal rendering).
//!
//! # Grid vs. pixels
//!
//! The snake lives on an abstract grid of cells. A cell is drawn as a filled
//! square of `segment_size` pixels, so cell `(x, y)` covers the pixels starting
//! at `(x * segment_size, y * segment_size)`. The pixel origin is the top-left
//! corner of the display.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DISPLAY_WIDTH` | 32 | Display width in pixels |
//! | `DEFAULT_DISPLAY_HEIGHT` | 32 | Display height in pixels |
//! | `MAX_DISPLAY_SIZE` | 1024 | Largest display side in pixels |
//! | `DEFAULT_SEGMENT_SIZE` | 2 | Pixels per cell side |
//! | `DEFAULT_SNAKE_LENGTH` | 5 | Segments in a fresh snake |
//! | `MAX_SNAKE_LENGTH` | 64 | Storage capacity for segments |
//! | `TICK_MS` | 1000 | Fixed delay between ticks |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Segment};
//!
//! // Tokens are the classic WASD keys (case-insensitive)
//! assert_eq!(Direction::from_token("w"), Some(Direction::Up));
//! assert_eq!(Direction::from_token("D\n"), Some(Direction::Right));
//! assert_eq!(Direction::from_token("x"), None);
//!
//! // Opposites are explicit
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // Segments translate along a heading
//! let mut seg = Segment::new(5, 5);
//! seg.translate(Direction::Up, 2);
//! assert_eq!(seg, Segment::new(5, 3));
//! ```

/// Default display width in pixels (one 32x32 panel)
pub const DEFAULT_DISPLAY_WIDTH: u16 = 32;

/// Default display height in pixels
pub const DEFAULT_DISPLAY_HEIGHT: u16 = 32;

/// Largest accepted display width or height in pixels
pub const MAX_DISPLAY_SIZE: u16 = 1024;

/// Default side of one segment in pixels
pub const DEFAULT_SEGMENT_SIZE: u16 = 2;

/// Default number of segments in the snake
pub const DEFAULT_SNAKE_LENGTH: usize = 5;

/// Upper bound on snake length (segments are stored inline, no heap)
pub const MAX_SNAKE_LENGTH: usize = 64;

/// Default fixed delay between ticks in milliseconds
pub const TICK_MS: u64 = 1000;

/// Color of a snake segment
pub const SNAKE_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Color of an empty pixel
pub const BACKGROUND_COLOR: Rgb = Rgb::new(0, 0, 0);

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Cardinal directions of travel
///
/// Screen orientation: `Up` decreases `y`, `Down` increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in token order (w, a, s, d)
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step `(dx, dy)` for one cell of travel
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse a player command token
    ///
    /// Surrounding whitespace (including the trailing newline of a line read)
    /// is ignored, and matching is case-insensitive. Anything other than one of
    /// the four WASD keys yields `None`.
    pub fn from_token(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" => Some(Direction::Up),
            "a" => Some(Direction::Left),
            "s" => Some(Direction::Down),
            "d" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Canonical token for this direction
    pub fn as_token(&self) -> &'static str {
        match self {
            Direction::Up => "w",
            Direction::Left => "a",
            Direction::Down => "s",
            Direction::Right => "d",
        }
    }
}

/// One grid cell occupied by the snake
///
/// Segments carry no identity beyond their coordinates; two segments are equal
/// iff they sit on the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    pub x: i32,
    pub y: i32,
}

impl Segment {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move this segment `amount` cells along `dir`
    pub fn translate(&mut self, dir: Direction, amount: i32) {
        let (dx, dy) = dir.delta();
        self.x += dx * amount;
        self.y += dy * amount;
    }

    /// Copy of this segment moved `amount` cells along `dir`
    pub fn translated(mut self, dir: Direction, amount: i32) -> Self {
        self.translate(dir, amount);
        self
    }
}
