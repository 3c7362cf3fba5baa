//! Game grid abstractions.
//!
//! Grid is implemented like a screen, so (0, 0) point is in the top left
//! corner, Y-axis is going down from the zero point and X-axis is going right
//! from the zero point.

use crate::{aux::Position, error::GameError};
use itertools::{iproduct, Itertools};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Game grid, the board where the snake lives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
	/// [`Grid`] size in cells, columns first. Valid points are in
	/// `0..size.0` and `0..size.1`.
	pub size: (usize, usize),
}

impl Grid {
	/// Default size of the grid used with [`Default`](Self::default) trait
	/// implementation.
	pub const DEFAULT_SIZE: (usize, usize) = (40, 30);

	/// Maximum amount of cells on one side. Parsed sizes above it are
	/// rejected, so coordinates always fit into `i32`.
	pub const MAX_SIDE: usize = 1000;

	/// Return a new [`Grid`].
	pub fn new(size: (usize, usize)) -> Self {
		Self { size }
	}

	/// Return `true` if `coords` is inside the grid.
	pub fn contains(&self, coords: Position) -> bool {
		let (w, h) = (self.size.0 as i32, self.size.1 as i32);
		(0..w).contains(&coords.x) && (0..h).contains(&coords.y)
	}

	/// Return the central cell.
	pub fn center(&self) -> Position {
		Position::new((self.size.0 / 2) as i32, (self.size.1 / 2) as i32)
	}

	/// Return amount of cells.
	pub fn cells(&self) -> usize {
		self.size.0 * self.size.1
	}

	/// Pick a random cell which is not in `occupied`. Return none if every
	/// cell is taken.
	pub fn random_free<R: Rng + ?Sized>(
		&self,
		rng: &mut R,
		occupied: &[Position],
	) -> Option<Position> {
		let (w, h) = (self.size.0 as i32, self.size.1 as i32);
		let free = iproduct!(0..w, 0..h)
			.map(Position::from)
			.filter(|cell| !occupied.contains(cell))
			.collect_vec();
		free.choose(rng).copied()
	}
}

impl Default for Grid {
	fn default() -> Self {
		Self::new(Self::DEFAULT_SIZE)
	}
}

impl FromStr for Grid {
	type Err = GameError;

	/// Parse `WxH`, for example `40x30`. Both sides must be in
	/// `1..=MAX_SIDE`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || GameError::InvalidGridSize(s.to_string());
		let side = 1..=Self::MAX_SIDE;
		let (w, h) = s
			.split('x')
			.map(|n| n.trim().parse::<usize>())
			.collect_tuple()
			.ok_or_else(invalid)?;
		match (w, h) {
			(Ok(w), Ok(h)) if side.contains(&w) && side.contains(&h) => Ok(Self::new((w, h))),
			_ => Err(invalid()),
		}
	}
}

impl fmt::Display for Grid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.size.0, self.size.1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{rngs::StdRng, SeedableRng};

	#[test]
	fn contains() {
		let grid = Grid::new((10, 5));
		assert!(grid.contains(Position::new(0, 0)));
		assert!(grid.contains(Position::new(9, 4)));
		assert!(!grid.contains(Position::new(10, 4)));
		assert!(!grid.contains(Position::new(9, 5)));
		assert!(!grid.contains(Position::new(-1, 0)));
		assert!(!grid.contains(Position::new(0, -1)));
		assert_eq!(grid.center(), Position::new(5, 2));
	}

	#[test]
	fn random_free() {
		let mut rng = StdRng::seed_from_u64(7);
		let grid = Grid::new((3, 2));
		let mut occupied = vec![];

		for _ in 0..grid.cells() {
			let cell = grid.random_free(&mut rng, &occupied).unwrap();
			assert!(grid.contains(cell));
			assert!(!occupied.contains(&cell));
			occupied.push(cell);
		}
		assert_eq!(grid.random_free(&mut rng, &occupied), None);
	}

	#[test]
	fn from_str() -> crate::Result<()> {
		assert_eq!("40x30".parse::<Grid>()?, Grid::new((40, 30)));
		assert_eq!(" 8 x 6 ".parse::<Grid>()?.size, (8, 6));
		assert_eq!("1000x1".parse::<Grid>()?.size, (Grid::MAX_SIDE, 1));
		assert_eq!(Grid::default().to_string(), "40x30");

		for bad in [
			"",
			"40",
			"0x30",
			"40x0",
			"axb",
			"1x2x3",
			"1001x30",
			"100000x100000",
			"4294967297x5",
		] {
			assert_eq!(
				bad.parse::<Grid>(),
				Err(GameError::InvalidGridSize(bad.to_string()))
			);
		}
		Ok(())
	}
}
