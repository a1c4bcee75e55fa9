//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake's rules: state, movement, collisions, and the
//! draw commands that describe a frame. It has **zero dependencies** on
//! terminals, threads, or I/O, making it:
//!
//! - **Deterministic**: the same inputs always produce the same game
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Fast**: the tick hot path never allocates
//!
//! # Module Structure
//!
//! - [`canvas`]: the pixel surface contract and draw commands
//! - [`layout`]: grid geometry, grid-to-pixel mapping, and the drawable interior
//! - [`snake`]: the fixed-length segment chain and its follow-the-leader shift
//! - [`game_state`]: heading, reversal guard, collision detection, game lifecycle
//!
//! # Game Rules
//!
//! - The snake has a fixed length and moves one cell per tick
//! - A heading change that is the exact opposite of the current heading is ignored
//! - The game ends when the head lands on another segment or reaches the
//!   one-segment margin along any edge of the display
//! - Once dead, a game never comes back to life
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, Layout, Status};
//! use tui_snake_types::{Direction, Segment};
//!
//! // 20x20 pixels with 2-pixel segments is a 10x10 grid
//! let layout = Layout::new(20, 20, 2);
//! let mut game = GameState::new(layout, 5).unwrap();
//! assert_eq!(game.snake().head(), Segment::new(5, 5));
//!
//! // Reversing is ignored, turning is not
//! assert!(!game.steer(Direction::Left));
//! assert!(game.steer(Direction::Up));
//!
//! assert_eq!(game.step(None), Status::Running);
//! assert_eq!(game.snake().head(), Segment::new(5, 4));
//! ```

pub mod canvas;
pub mod game_state;
pub mod layout;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use canvas::{Canvas, DrawCommand, PixelBuffer};
pub use game_state::{Collision, GameState, Status};
pub use layout::Layout;
pub use snake::Snake;
