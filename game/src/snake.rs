//! Snake abstractions.
//!
//! A [`Snake`] is a [`SnakeHead`] followed by a chain of [`SnakeSegment`]s.
//! Only the head knows where it is going; every segment just takes the place
//! its predecessor had one tick earlier.

use crate::aux::*;
use itertools::Itertools;
use std::fmt;

/// Leading part of a snake.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeHead {
    coords: Position,

    /// Last applied step.
    step: Position,
}

impl SnakeHead {
    /// Return a stationary head at `coords`.
    pub fn new(coords: Position) -> Self {
        Self {
            coords,
            step: Position::ZERO,
        }
    }

    /// Move the head by `step`, or by the last applied step if it's none.
    ///
    /// # Example
    /// ```
    /// use game::{aux::Position, snake::SnakeHead};
    ///
    /// let mut head = SnakeHead::new(Position::new(3, 4));
    ///
    /// head.advance(Some(Position::new(1, 0)));
    /// head.advance(None);
    ///
    /// assert_eq!(Position::new(5, 4), head.coords());
    /// ```
    pub fn advance(&mut self, step: Option<Position>) {
        if let Some(step) = step {
            self.step = step;
        }
        self.coords = self.coords + self.step;
    }

    /// Return head coordinates.
    pub fn coords(&self) -> Position {
        self.coords
    }

    /// Return last applied step.
    pub fn step(&self) -> Position {
        self.step
    }
}

/// Body part of a snake.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeSegment {
    coords: Position,
}

impl SnakeSegment {
    /// Return a new segment at `coords`.
    pub fn new(coords: Position) -> Self {
        Self { coords }
    }

    /// Put the segment to `coords`.
    pub fn advance(&mut self, coords: Position) {
        self.coords = coords;
    }

    /// Return segment coordinates.
    pub fn coords(&self) -> Position {
        self.coords
    }
}

/// Snake abstraction structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    head: SnakeHead,

    /// Body from the neck to the tail.
    segments: Vec<SnakeSegment>,
}

impl Snake {
    /// Return a snake without a body with its head at `start`.
    pub fn new(start: Position) -> Self {
        Self {
            head: SnakeHead::new(start),
            segments: Vec::new(),
        }
    }

    /// Move the head by `step` (or by the last applied one if it's none) and
    /// pull every segment into the place of its predecessor.
    ///
    /// Return the cell which was left by the tail, that is where the tail was
    /// before this move.
    pub fn advance(&mut self, step: Option<Position>) -> Position {
        let mut prev = self.head.coords();
        self.head.advance(step);

        for segment in &mut self.segments {
            let tmp = segment.coords();
            segment.advance(prev);
            prev = tmp;
        }
        prev
    }

    /// Advance the snake and add a new segment into the cell left by the
    /// tail.
    pub fn grow(&mut self, step: Option<Position>) {
        let vacated = self.advance(step);
        self.segments.push(SnakeSegment::new(vacated));
        log::debug!("snake grew to {} points, new tail at {}", self.len(), vacated);
    }

    /// Return coordinates of the head and then every segment in body order.
    pub fn points(&self) -> Vec<Position> {
        let mut points = Vec::with_capacity(self.len());
        points.push(self.head.coords());
        points.extend(self.segments.iter().map(SnakeSegment::coords));
        points
    }

    /// Return head coordinates.
    pub fn head(&self) -> Position {
        self.head.coords()
    }

    /// Return last step applied to the head.
    pub fn step(&self) -> Position {
        self.head.step()
    }

    /// Return amount of points (head included).
    pub fn len(&self) -> usize {
        self.segments.len() + 1
    }

    /// Return amount of body segments.
    pub fn segments(&self) -> usize {
        self.segments.len()
    }

    /// Return `true` if the head is on one of the segments.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.segments.iter().any(|s| s.coords() == head)
    }

    /// Return `true` if any part of the snake is at `coords`.
    pub fn occupies(&self, coords: Position) -> bool {
        self.head() == coords || self.segments.iter().any(|s| s.coords() == coords)
    }
}

impl fmt::Display for Snake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.points().iter().join(", "))
    }
}
