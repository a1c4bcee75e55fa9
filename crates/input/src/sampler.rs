//! Input sampler: background acquisition, non-blocking polling.
//!
//! The background task reads tokens from a [`LineSource`] and publishes each
//! one that names a direction into a [`CommandSlot`]; anything else is dropped
//! on the spot. The slot holds at most one token: a newer token
//! replaces an older one that was never polled (last write wins). The game loop
//! takes whatever is in the slot once per tick and never waits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::source::LineSource;
use crate::types::Direction;

/// A token exactly as the player produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand(String);

impl RawCommand {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The direction this token names, if it is one of the recognized keys.
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_token(&self.0)
    }
}

/// Anything the game loop can sample for the latest command.
pub trait CommandSource {
    /// Non-blocking. Returns the command pending since the last poll, if any.
    fn poll(&mut self) -> Option<RawCommand>;
}

/// Single-slot, last-write-wins handoff between one producer and one consumer.
#[derive(Debug, Default)]
pub struct CommandSlot {
    pending: Mutex<Option<RawCommand>>,
}

impl CommandSlot {
    /// Store `cmd`, returning the unconsumed command it replaced.
    pub fn publish(&self, cmd: RawCommand) -> Option<RawCommand> {
        self.pending.lock().replace(cmd)
    }

    pub fn take(&self) -> Option<RawCommand> {
        self.pending.lock().take()
    }
}

/// Handle to a background reader feeding a [`CommandSlot`].
///
/// Dropping the sampler asks the reader to stop after its current read. A read
/// that is blocked inside the source cannot be interrupted from here; sources
/// that can (like [`crate::KeySource`]) watch their own stop condition.
pub struct InputSampler {
    slot: Arc<CommandSlot>,
    cancel: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl InputSampler {
    /// Start reading `source` on the runtime's blocking pool.
    pub fn spawn<S>(handle: &Handle, source: S) -> Self
    where
        S: LineSource + Send + 'static,
    {
        let slot = Arc::new(CommandSlot::default());
        let cancel = Arc::new(AtomicBool::new(false));

        let task = {
            let slot = Arc::clone(&slot);
            let cancel = Arc::clone(&cancel);
            handle.spawn_blocking(move || acquire(source, &slot, &cancel))
        };

        Self {
            slot,
            cancel,
            task: Some(task),
        }
    }

    /// Whether the background reader has stopped (source exhausted, failed,
    /// or cancelled). Already-published commands can still be polled.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Ask the reader to stop and hand back its task so the caller can await it.
    pub fn shutdown(mut self) -> Option<JoinHandle<()>> {
        self.cancel.store(true, Ordering::Release);
        self.task.take()
    }
}

impl CommandSource for InputSampler {
    fn poll(&mut self) -> Option<RawCommand> {
        self.slot.take()
    }
}

impl Drop for InputSampler {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Release);
    }
}

fn acquire<S: LineSource>(mut source: S, slot: &CommandSlot, cancel: &AtomicBool) {
    log::debug!("input reader started");
    while !cancel.load(Ordering::Acquire) {
        match source.read_line() {
            Ok(Some(token)) => {
                if cancel.load(Ordering::Acquire) {
                    break;
                }
                let cmd = RawCommand::new(token);
                // Only directions reach the slot, so noise cannot displace a turn.
                if cmd.direction().is_none() {
                    log::debug!("ignoring unrecognized token {:?}", cmd.as_str());
                    continue;
                }
                if let Some(dropped) = slot.publish(cmd) {
                    log::trace!("superseded unpolled command {:?}", dropped.as_str());
                }
            }
            Ok(None) => {
                log::info!("input source closed");
                return;
            }
            Err(e) => {
                log::warn!("input source failed: {}", e);
                return;
            }
        }
    }
    log::debug!("input reader cancelled");
}
