//! Game state module - manages the complete game state
//!
//! Ties the snake to its heading and the display geometry. One call to
//! [`GameState::step`] is one tick of game logic: steer, shift, collide.
//! Rendering is a pure read through [`GameState::draw_commands`].

use crate::canvas::DrawCommand;
use crate::layout::Layout;
use crate::snake::Snake;
use crate::types::{Direction, SNAKE_COLOR};

/// What killed the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// Head landed on a trailing segment.
    SelfCollision,
    /// Head reached the margin along an edge of the display.
    Boundary,
}

impl Collision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collision::SelfCollision => "self",
            Collision::Boundary => "boundary",
        }
    }
}

/// Lifecycle of one game. `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    Dead(Collision),
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    layout: Layout,
    heading: Direction,
    snake: Snake,
    status: Status,
    /// Ticks advanced while running (including the fatal one).
    ticks: u64,
}

impl GameState {
    /// New game: head on the center cell, heading right, body trailing left.
    ///
    /// Returns `None` if the snake length is unsupported or the initial snake
    /// does not fit inside the drawable interior.
    pub fn new(layout: Layout, length: usize) -> Option<Self> {
        let heading = Direction::Right;
        let snake = Snake::new(layout.center(), heading, length)?;
        if !snake.segments().iter().all(|&seg| layout.in_interior(seg)) {
            return None;
        }
        Some(Self::with_snake(layout, heading, snake))
    }

    /// Game in an arbitrary running position.
    pub fn with_snake(layout: Layout, heading: Direction, snake: Snake) -> Self {
        Self {
            layout,
            heading,
            snake,
            status: Status::Running,
            ticks: 0,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_dead(&self) -> bool {
        matches!(self.status, Status::Dead(_))
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Request a new heading.
    ///
    /// The exact opposite of the current heading is refused (the snake would
    /// turn into its own neck). Returns whether the heading was accepted;
    /// re-requesting the current heading counts as accepted.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir == self.heading.opposite() {
            return false;
        }
        self.heading = dir;
        true
    }

    /// Shift the segment chain one cell along the heading.
    pub fn advance(&mut self) {
        self.snake.shift(self.heading);
    }

    /// Test the current position and die on a collision.
    ///
    /// A dead game keeps its original cause.
    pub fn check_collisions(&mut self) -> Option<Collision> {
        if let Status::Dead(cause) = self.status {
            return Some(cause);
        }
        let cause = if self.snake.head_hits_body() {
            Collision::SelfCollision
        } else if !self.layout.in_interior(self.snake.head()) {
            Collision::Boundary
        } else {
            return None;
        };
        self.status = Status::Dead(cause);
        Some(cause)
    }

    /// One tick of game logic.
    ///
    /// `command` is the direction sampled for this tick, if any. It is applied
    /// before the shift so it takes effect on this tick's movement. A dead game
    /// is left untouched.
    pub fn step(&mut self, command: Option<Direction>) -> Status {
        if self.is_dead() {
            return self.status;
        }
        if let Some(dir) = command {
            self.steer(dir);
        }
        self.advance();
        self.ticks += 1;
        self.check_collisions();
        self.status
    }

    /// Draw commands for the current frame, head to tail.
    pub fn draw_commands(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        let size = self.layout.segment_size();
        self.snake.segments().iter().map(move |&seg| {
            let (x, y) = self.layout.to_pixel(seg);
            DrawCommand::FillSquare {
                x,
                y,
                size,
                color: SNAKE_COLOR,
            }
        })
    }
}
