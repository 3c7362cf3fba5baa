//! Food abstractions.

use crate::aux::{Color, Position};
use serde::{Deserialize, Serialize};

/// Food which is going to be eaten by the snake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Food {
    coords: Position,
}

impl Food {
    /// Default food color.
    pub const COLOR: Color = Color::FOOD;

    /// Return a new [`Food`].
    pub fn new(coords: Position) -> Self {
        Self { coords }
    }

	/// Return food coordinates.
	pub fn coords(&self) -> Position {
		self.coords
	}
}
