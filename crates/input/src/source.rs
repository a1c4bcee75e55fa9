//! Blocking token sources.
//!
//! A [`LineSource`] is the raw input primitive: each call blocks until one
//! token is available. Sources are driven from a background task by
//! [`crate::InputSampler`], never from the game loop.

use std::io::{self, BufRead};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::interrupt::Interrupt;
use crate::map::{key_token, should_quit};

/// Blocking read of one token.
pub trait LineSource {
    /// Block until the next token. `Ok(None)` means the source is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Line-per-token source over any buffered reader (stdin, a pipe, a file).
///
/// A token ends at `\n` or `\r`: a terminal in raw mode sends a bare CR for
/// Enter. With CRLF input the LF shows up as an empty token of its own.
pub struct BufReadSource<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> BufReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(16),
        }
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.line.clear();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.line.extend_from_slice(&available[..=end]);
                    self.reader.consume(end + 1);
                    break;
                }
                None => {
                    let n = available.len();
                    self.line.extend_from_slice(available);
                    self.reader.consume(n);
                }
            }
        }
        if self.line.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.line).into_owned()))
    }
}

// How often a blocked key read looks at the interrupt flag.
const KEY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal key presses as tokens.
///
/// Quit keys raise the shared interrupt and end the source. The source also
/// ends on its own once the interrupt is raised elsewhere, so a background
/// reader never outlives the game by more than one poll interval.
pub struct KeySource {
    interrupt: Interrupt,
}

impl KeySource {
    pub fn new(interrupt: Interrupt) -> Self {
        Self { interrupt }
    }
}

impl LineSource for KeySource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        loop {
            if self.interrupt.is_raised() {
                return Ok(None);
            }
            if !event::poll(KEY_POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Ignore terminal auto-repeat and releases; one press, one token.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                self.interrupt.raise();
                return Ok(None);
            }
            if let Some(token) = key_token(key) {
                return Ok(Some(token));
            }
        }
    }
}
