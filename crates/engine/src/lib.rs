//! Engine module - the real-time loop around the core game state
//!
//! The engine owns the [`GameState`](crate::core::GameState) and drives it at a
//! fixed cadence. Per tick it:
//!
//! 1. stops if the shared [`Interrupt`](crate::input::Interrupt) is raised
//!    (nothing else happens on that tick),
//! 2. polls the command source without blocking,
//! 3. steps the game (steer, shift, collide),
//! 4. draws every segment and presents the frame (unless the snake just died
//!    and [`FatalFrame::Skip`] is configured),
//! 5. sleeps the fixed tick delay.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{Canvas, GameState, Layout, PixelBuffer};
//! use tui_snake_engine::{Display, End, Engine};
//! use tui_snake_input::{CommandSource, Interrupt, RawCommand};
//! use tui_snake_types::Rgb;
//!
//! struct Headless(PixelBuffer);
//!
//! impl Canvas for Headless {
//!     fn width(&self) -> i32 { self.0.width() }
//!     fn height(&self) -> i32 { self.0.height() }
//!     fn set_pixel(&mut self, x: i32, y: i32, c: Rgb) { self.0.set_pixel(x, y, c) }
//!     fn fill(&mut self, c: Rgb) { self.0.fill(c) }
//! }
//!
//! impl Display for Headless {
//!     fn present(&mut self) -> anyhow::Result<()> { Ok(()) }
//! }
//!
//! struct NoInput;
//!
//! impl CommandSource for NoInput {
//!     fn poll(&mut self) -> Option<RawCommand> { None }
//! }
//!
//! let state = GameState::new(Layout::new(20, 20, 2), 5).unwrap();
//! let mut engine = Engine::new(state, Headless(PixelBuffer::new(20, 20)), NoInput, Interrupt::new());
//!
//! // Straight into the right-hand wall.
//! let outcome = engine.run().unwrap();
//! assert!(matches!(outcome.end, End::Dead(_)));
//! ```

pub mod config;
pub mod engine;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_types as types;

pub use config::{ConfigError, Fallback, FatalFrame, InputMode, SnakeConfig};
pub use engine::{Display, End, Engine, Outcome};
