//! Input module (engine-facing).
//!
//! Decouples waiting for the player from the fixed-cadence game loop. A
//! [`LineSource`] blocks until the player produces a token; an
//! [`InputSampler`] runs that source on a background blocking task and parks
//! the newest token in a single slot the loop can poll without waiting.
//!
//! - [`sampler`]: the single-slot handoff and the background task handle
//! - [`source`]: blocking token sources (terminal keys, buffered lines)
//! - [`map`]: terminal key events to command tokens
//! - [`interrupt`]: the shared cooperative stop flag

pub mod interrupt;
pub mod map;
pub mod sampler;
pub mod source;

pub use tui_snake_types as types;

pub use interrupt::Interrupt;
pub use map::{key_token, should_quit};
pub use sampler::{CommandSlot, CommandSource, InputSampler, RawCommand};
pub use source::{BufReadSource, KeySource, LineSource};
