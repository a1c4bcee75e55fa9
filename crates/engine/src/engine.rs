//! Fixed-timestep game loop.
//!
//! Each tick: stop if interrupted, poll the command source without waiting,
//! step the game, draw the frame, present it, sleep a fixed delay.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::config::FatalFrame;
use crate::core::{Canvas, Collision, GameState, Status};
use crate::input::{CommandSource, Interrupt};

/// A canvas that can push a finished frame to a real display.
pub trait Display: Canvas {
    fn present(&mut self) -> Result<()>;
}

impl<D: Display + ?Sized> Display for &mut D {
    fn present(&mut self) -> Result<()> {
        (**self).present()
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Dead(Collision),
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub end: End,
    /// Ticks the game advanced.
    pub ticks: u64,
}

pub struct Engine<D, S> {
    state: GameState,
    display: D,
    input: S,
    interrupt: Interrupt,
    tick: Duration,
    fatal_frame: FatalFrame,
}

impl<D: Display, S: CommandSource> Engine<D, S> {
    pub fn new(state: GameState, display: D, input: S, interrupt: Interrupt) -> Self {
        Self {
            state,
            display,
            input,
            interrupt,
            tick: Duration::ZERO,
            fatal_frame: FatalFrame::default(),
        }
    }

    /// Fixed delay between ticks.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_fatal_frame(mut self, fatal_frame: FatalFrame) -> Self {
        self.fatal_frame = fatal_frame;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run until the snake dies or the interrupt is raised.
    pub fn run(&mut self) -> Result<Outcome> {
        log::info!(
            "game started: {} segments on {}x{} cells, tick {:?}",
            self.state.snake().len(),
            self.state.layout().cols(),
            self.state.layout().rows(),
            self.tick
        );

        self.render()?;

        let end = loop {
            if self.interrupt.is_raised() {
                break End::Interrupted;
            }
            if let Status::Dead(cause) = self.tick()? {
                break End::Dead(cause);
            }
            thread::sleep(self.tick);
        };

        let outcome = Outcome {
            end,
            ticks: self.state.ticks(),
        };
        match end {
            End::Dead(cause) => log::info!(
                "snake died ({}) after {} ticks",
                cause.as_str(),
                outcome.ticks
            ),
            End::Interrupted => log::info!("interrupted after {} ticks", outcome.ticks),
        }
        Ok(outcome)
    }

    /// One tick without the interrupt check or the delay.
    pub fn tick(&mut self) -> Result<Status> {
        let command = self.input.poll().and_then(|raw| {
            let dir = raw.direction();
            if dir.is_none() {
                log::debug!("ignoring unrecognized token {:?}", raw.as_str());
            }
            dir
        });

        if let Some(dir) = command {
            if dir == self.state.heading().opposite() {
                log::debug!("ignoring reversal to {:?}", dir);
            }
        }

        let status = self.state.step(command);
        let draw = match status {
            Status::Running => true,
            Status::Dead(_) => self.fatal_frame == FatalFrame::Render,
        };
        if draw {
            self.render()?;
        }
        Ok(status)
    }

    fn render(&mut self) -> Result<()> {
        self.display.clear();
        for cmd in self.state.draw_commands() {
            cmd.apply(&mut self.display);
        }
        self.display.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crate::core::{Layout, PixelBuffer, Snake};
    use crate::input::RawCommand;
    use crate::types::{Direction, Segment, SNAKE_COLOR};

    /// Pixel buffer that counts presented frames.
    struct TestDisplay {
        pixels: PixelBuffer,
        frames: usize,
    }

    impl TestDisplay {
        fn new(width: u16, height: u16) -> Self {
            Self {
                pixels: PixelBuffer::new(width, height),
                frames: 0,
            }
        }
    }

    impl Canvas for TestDisplay {
        fn width(&self) -> i32 {
            self.pixels.width()
        }
        fn height(&self) -> i32 {
            self.pixels.height()
        }
        fn set_pixel(&mut self, x: i32, y: i32, color: crate::types::Rgb) {
            self.pixels.set_pixel(x, y, color);
        }
        fn fill(&mut self, color: crate::types::Rgb) {
            self.pixels.fill(color);
        }
    }

    impl Display for TestDisplay {
        fn present(&mut self) -> Result<()> {
            self.frames += 1;
            Ok(())
        }
    }

    /// One scripted poll result per tick.
    #[derive(Default)]
    struct Script(VecDeque<Option<&'static str>>);

    impl Script {
        fn new(steps: &[Option<&'static str>]) -> Self {
            Self(steps.iter().copied().collect())
        }
    }

    impl CommandSource for Script {
        fn poll(&mut self) -> Option<RawCommand> {
            self.0.pop_front().flatten().map(RawCommand::new)
        }
    }

    fn engine(script: Script) -> Engine<TestDisplay, Script> {
        let state = GameState::new(Layout::new(20, 20, 2), 5).unwrap();
        Engine::new(state, TestDisplay::new(20, 20), script, Interrupt::new())
    }

    #[test]
    fn tick_draws_every_segment() {
        let mut e = engine(Script::default());
        assert_eq!(e.tick().unwrap(), Status::Running);
        assert_eq!(e.display().frames, 1);
        assert_eq!(e.display().pixels.lit_count(), 5 * 4);
        // Head moved from (5,5) to (6,5): pixels (12..14, 10..12).
        assert_eq!(e.display().pixels.get(12, 10), Some(SNAKE_COLOR));
        assert_eq!(e.display().pixels.get(13, 11), Some(SNAKE_COLOR));
    }

    #[test]
    fn unrecognized_token_changes_nothing() {
        let mut with_noise = engine(Script::new(&[None, Some("x")]));
        let mut silent = engine(Script::default());
        for _ in 0..2 {
            with_noise.tick().unwrap();
            silent.tick().unwrap();
        }
        assert_eq!(with_noise.state(), silent.state());
    }

    #[test]
    fn interrupt_stops_before_any_tick() {
        let mut e = engine(Script::default());
        e.interrupt.raise();
        let outcome = e.run().unwrap();
        assert_eq!(
            outcome,
            Outcome {
                end: End::Interrupted,
                ticks: 0
            }
        );
        assert_eq!(e.state().snake().head(), Segment::new(5, 5));
        // Only the initial frame was drawn.
        assert_eq!(e.display().frames, 1);
    }

    #[test]
    fn run_ends_at_the_wall() {
        // Head at (5,5) heading right dies entering column 9 on tick 4.
        let mut e = engine(Script::default());
        let outcome = e.run().unwrap();
        assert_eq!(outcome.end, End::Dead(Collision::Boundary));
        assert_eq!(outcome.ticks, 4);
        // Initial frame plus three live ticks; the fatal frame is skipped.
        assert_eq!(e.display().frames, 4);
    }

    #[test]
    fn fatal_frame_can_be_rendered() {
        let mut e = engine(Script::default()).with_fatal_frame(FatalFrame::Render);
        let outcome = e.run().unwrap();
        assert_eq!(outcome.end, End::Dead(Collision::Boundary));
        assert_eq!(e.display().frames, 5);
        // Head square at (9,5) is drawn (pixels 18..20).
        assert_eq!(e.display().pixels.get(18, 10), Some(SNAKE_COLOR));
    }

    #[test]
    fn turn_takes_effect_on_the_same_tick() {
        let mut e = engine(Script::new(&[Some("w\n")]));
        e.tick().unwrap();
        assert_eq!(e.state().heading(), Direction::Up);
        assert_eq!(e.state().snake().head(), Segment::new(5, 4));
    }

    #[test]
    fn self_collision_ends_run() {
        let snake = Snake::from_segments([
            Segment::new(4, 4),
            Segment::new(5, 4),
            Segment::new(5, 5),
            Segment::new(4, 5),
            Segment::new(3, 5),
        ])
        .unwrap();
        let state = GameState::with_snake(Layout::new(20, 20, 2), Direction::Left, snake);
        let script = Script::new(&[Some("s")]);
        let mut e = Engine::new(state, TestDisplay::new(20, 20), script, Interrupt::new());

        let outcome = e.run().unwrap();
        assert_eq!(outcome.end, End::Dead(Collision::SelfCollision));
        assert_eq!(outcome.ticks, 1);
    }
}
