//! Terminal display module.
//!
//! Presents the game's pixel canvas in a terminal. There is no widget layer:
//! pixels are packed into a simple framebuffer of styled character cells, and
//! the framebuffer is flushed to the terminal with crossterm.
//!
//! Each terminal cell shows two vertically stacked pixels using the upper
//! half-block glyph (`▀`): the foreground color is the upper pixel, the
//! background color the lower one. Since terminal glyphs are about twice as
//! tall as they are wide, pixels come out roughly square.
//!
//! - [`fb`]: framebuffer and style types
//! - [`pixel_view`]: pure mapping from a pixel buffer into a framebuffer
//! - [`renderer`]: diffing flush of framebuffers to the real terminal
//! - [`canvas`]: the [`Display`](crate::engine::Display) the game draws on

pub mod canvas;
pub mod fb;
pub mod pixel_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_types as types;

pub use canvas::TerminalCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use pixel_view::{PixelView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
