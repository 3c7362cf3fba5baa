//! Game abstractions crate.

pub mod aux;
pub mod error;
pub mod food;
pub mod grid;
pub mod snake;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		aux::*, food::Food, grid::Grid, snake::Snake, Collision, Frame, Game,
		GameState, Settings,
	};
}

use aux::{Direction, Position};
use food::Food;
use grid::Grid;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use snake::Snake;
use std::fmt;

/// What killed the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collision {
	/// The head left the grid.
	Wall,

	/// The head ran into the body.
	SelfBite,
}

impl fmt::Display for Collision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Wall => write!(f, "hit the wall"),
			Self::SelfBite => write!(f, "bit itself"),
		}
	}
}

/// State of a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
	/// Snake is moving.
	Running,

	/// Ticks are ignored until the game is resumed.
	Paused,

	/// Snake collided with something.
	Over(Collision),

	/// Snake took the whole grid.
	Won,
}

impl GameState {
	/// Return `true` if the game can't continue without a restart.
	pub fn is_finished(&self) -> bool {
		matches!(self, Self::Over(_) | Self::Won)
	}
}

/// Snapshot of everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Frame {
	/// Snake points, head first.
	pub snake: Vec<Position>,

	/// Food position, none if there's no free cell for it.
	pub food: Option<Position>,

	/// Amount of eaten food.
	pub score: usize,

	/// Game state.
	pub state: GameState,
}

impl Frame {
	/// Convert [`Frame`] to json string.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}

/// Game session: the snake, the food and the rules binding them.
#[derive(Debug, Clone)]
pub struct Game {
	grid: Grid,
	snake: Snake,
	food: Option<Food>,
	score: usize,
	state: GameState,
	settings: Settings,

	/// Direction to use on the first tick if there's no input.
	initial_direction: Option<Direction>,

	rng: StdRng,
}

impl Game {
	/// Return a new [`Game`] with the snake in the center of the grid.
	pub fn new(settings: Settings) -> Self {
		Self::with_rng(settings, StdRng::from_entropy())
	}

	/// Same as [`new`](Self::new) but food positions are generated by `rng`.
	pub fn with_rng(settings: Settings, rng: StdRng) -> Self {
		let grid = settings.grid;
		let mut game = Self {
			grid,
			snake: Snake::new(grid.center()),
			food: None,
			score: 0,
			state: GameState::Running,
			initial_direction: settings.initial_direction,
			settings,
			rng,
		};
		game.spawn_food();
		log::debug!("new game on {} grid, snake at {}", game.grid, game.snake.head());
		game
	}

	/// Start over with the same settings.
	pub fn restart(&mut self) {
		self.snake = Snake::new(self.grid.center());
		self.score = 0;
		self.state = GameState::Running;
		self.initial_direction = self.settings.initial_direction;
		self.spawn_food();
		log::info!("game restarted");
	}

	/// Do one move of the snake.
	///
	/// `input` is the direction chosen by the player since the previous tick.
	/// If it's none, the snake keeps its direction. Turning straight back is
	/// ignored while the snake has a body.
	///
	/// If the head is on the food, the snake grows instead of just moving and
	/// the food goes to another free cell.
	pub fn tick(&mut self, input: Option<Direction>) {
		if self.state != GameState::Running {
			return;
		}

		let input = input.or_else(|| self.initial_direction.take());
		let step = self.resolve_step(input);
		let eating = self.food.map(|f| f.coords()) == Some(self.snake.head());

		if eating {
			self.snake.grow(step);
		} else {
			self.snake.advance(step);
		}
		log::trace!("tick: snake at {}", self.snake);

		if let Some(collision) = self.collision() {
			self.state = GameState::Over(collision);
			log::info!("game over: snake {} with score {}", collision, self.score);
			return;
		}

		if eating {
			self.score += 1;
			self.spawn_food();
		}
	}

	/// Pause a running game or resume a paused one.
	pub fn toggle_pause(&mut self) {
		self.state = match self.state {
			GameState::Running => GameState::Paused,
			GameState::Paused => GameState::Running,
			state => state,
		};
	}

	/// Return a snapshot for rendering.
	pub fn frame(&self) -> Frame {
		Frame {
			snake: self.snake.points(),
			food: self.food.map(|f| f.coords()),
			score: self.score,
			state: self.state,
		}
	}

	/// Return game [`Grid`].
	pub fn grid(&self) -> Grid {
		self.grid
	}

	/// Return game state.
	pub fn state(&self) -> GameState {
		self.state
	}

	/// Return amount of eaten food.
	pub fn score(&self) -> usize {
		self.score
	}

	/// Return game [`settings`](Settings).
	pub fn settings(&self) -> Settings {
		self.settings.clone()
	}

	fn resolve_step(&self, input: Option<Direction>) -> Option<Position> {
		input
			.map(Direction::step)
			.filter(|step| self.snake.segments() == 0 || *step != -self.snake.step())
	}

	fn collision(&self) -> Option<Collision> {
		let points = self.snake.points();
		let (head, body) = points.split_first()?;

		if !self.grid.contains(*head) {
			Some(Collision::Wall)
		} else if body.contains(head) {
			Some(Collision::SelfBite)
		} else {
			None
		}
	}

	/// Put food into a random free cell. If there's no such cell, the game is
	/// won.
	fn spawn_food(&mut self) {
		self.food = self
			.grid
			.random_free(&mut self.rng, &self.snake.points())
			.map(Food::new);
		match self.food {
			Some(food) => log::debug!("food spawned at {}", food.coords()),
			None => {
				self.state = GameState::Won;
				log::info!("snake took the whole grid, score {}", self.score);
			}
		}
	}
}

/// Game settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
	/// Board the snake moves on.
	pub grid: Grid,

	/// Direction the snake starts moving in. If it's none, the snake stands
	/// still until the first input.
	pub initial_direction: Option<Direction>,
}

impl Settings {
	/// Default grid size.
	pub const GRID_SIZE: (usize, usize) = Grid::DEFAULT_SIZE;

	/// Default initial snake direction.
	pub const INITIAL_DIRECTION: Option<Direction> = None;
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			grid: Grid::new(Self::GRID_SIZE),
			initial_direction: Self::INITIAL_DIRECTION,
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	fn game(size: (usize, usize)) -> Game {
		let settings = Settings {
			grid: Grid::new(size),
			..Default::default()
		};
		Game::with_rng(settings, StdRng::seed_from_u64(42))
	}

	fn p(x: i32, y: i32) -> Position {
		Position::new(x, y)
	}

	#[test]
	fn new_game() {
		let game = game((10, 10));
		let frame = game.frame();

		assert_eq!(frame.snake, [p(5, 5)]);
		assert_eq!(frame.state, GameState::Running);
		assert_eq!(frame.score, 0);
		let food = frame.food.unwrap();
		assert!(game.grid().contains(food));
		assert_ne!(food, p(5, 5));
	}

	#[test]
	fn stands_still_until_input() {
		let mut game = game((10, 10));
		game.food = Some(Food::new(p(0, 0)));

		game.tick(None);
		assert_eq!(game.snake.head(), p(5, 5));

		game.tick(Some(Direction::Up));
		game.tick(None);
		assert_eq!(game.snake.head(), p(5, 3));
	}

	#[test]
	fn initial_direction() {
		let settings = Settings {
			grid: Grid::new((10, 10)),
			initial_direction: Some(Direction::Left),
		};
		let mut game = Game::with_rng(settings, StdRng::seed_from_u64(1));
		game.food = Some(Food::new(p(9, 9)));

		game.tick(None);
		game.tick(None);
		assert_eq!(game.snake.head(), p(3, 5));
	}

	#[test]
	fn eats_food() {
		let mut game = game((10, 10));
		game.food = Some(Food::new(p(6, 5)));

		game.tick(Some(Direction::Right));
		assert_eq!(game.frame().snake, [p(6, 5)]);
		assert_eq!(game.score(), 0);

		game.tick(None);
		let frame = game.frame();
		assert_eq!(frame.snake, [p(7, 5), p(6, 5)]);
		assert_eq!(frame.score, 1);
		let food = frame.food.unwrap();
		assert!(!frame.snake.contains(&food));
	}

	#[test]
	fn hits_wall() {
		let mut game = game((5, 5));
		game.food = Some(Food::new(p(0, 0)));

		game.tick(Some(Direction::Right));
		game.tick(None);
		assert_eq!(game.state(), GameState::Running);

		game.tick(None);
		assert_eq!(game.state(), GameState::Over(Collision::Wall));

		let frame = game.frame();
		game.tick(Some(Direction::Left));
		assert_eq!(game.frame(), frame, "finished game doesn't move");
	}

	#[test]
	fn fatal_meal_is_not_counted() {
		let mut game = game((5, 5));
		game.food = Some(Food::new(p(4, 2)));

		game.tick(Some(Direction::Right));
		game.tick(None);
		assert_eq!(game.snake.head(), p(4, 2));

		game.tick(None);
		assert_eq!(game.state(), GameState::Over(Collision::Wall));
		assert_eq!(game.score(), 0);
		assert_eq!(game.frame().snake.len(), 2);
	}

	#[test]
	fn bites_itself() {
		let mut game = game((10, 10));
		game.food = Some(Food::new(p(0, 0)));
		game.snake = Snake::new(p(2, 2));
		for _ in 0..4 {
			game.snake.grow(Some(p(1, 0)));
		}

		game.tick(Some(Direction::Down));
		game.tick(Some(Direction::Left));
		assert_eq!(game.state(), GameState::Running);

		game.tick(Some(Direction::Up));
		assert_eq!(game.state(), GameState::Over(Collision::SelfBite));
	}

	#[test]
	fn reversal_is_ignored_with_body() {
		let mut game = game((10, 10));
		game.food = Some(Food::new(p(0, 0)));
		game.snake.grow(Some(Direction::Right.step()));

		game.tick(Some(Direction::Left));
		assert_eq!(game.snake.head(), p(7, 5));
		assert_eq!(game.state(), GameState::Running);
	}

	#[test]
	fn reversal_is_allowed_without_body() {
		let mut game = game((10, 10));
		game.food = Some(Food::new(p(0, 0)));

		game.tick(Some(Direction::Right));
		game.tick(Some(Direction::Left));
		assert_eq!(game.snake.head(), p(5, 5));
	}

	#[test]
	fn pause() {
		let mut game = game((10, 10));
		game.food = Some(Food::new(p(0, 0)));
		game.tick(Some(Direction::Down));

		game.toggle_pause();
		assert_eq!(game.state(), GameState::Paused);
		game.tick(None);
		assert_eq!(game.snake.head(), p(5, 6));

		game.toggle_pause();
		game.tick(None);
		assert_eq!(game.snake.head(), p(5, 7));
	}

	#[test]
	fn restart() {
		let mut game = game((4, 4));
		game.food = Some(Food::new(p(0, 0)));
		for _ in 0..3 {
			game.tick(Some(Direction::Up));
		}
		assert!(game.state().is_finished());

		game.toggle_pause();
		assert!(game.state().is_finished(), "finished game can't be paused");

		game.restart();
		let frame = game.frame();
		assert_eq!(frame.snake, [p(2, 2)]);
		assert_eq!(frame.state, GameState::Running);
		assert_eq!(frame.score, 0);
	}

	#[test]
	fn wins_on_full_grid() {
		let mut game = game((2, 1));
		assert_eq!(game.frame().food, Some(p(0, 0)));

		game.tick(Some(Direction::Left));
		game.tick(Some(Direction::Right));

		let frame = game.frame();
		assert_eq!(frame.snake, [p(1, 0), p(0, 0)]);
		assert_eq!(frame.food, None);
		assert_eq!(frame.state, GameState::Won);
	}

	#[test]
	fn frame_json() -> crate::Result<()> {
		let game = game((3, 3));
		let json: serde_json::Value = serde_json::from_str(&game.frame().to_json()?)?;

		assert_eq!(json["snake"][0]["x"], 1);
		assert_eq!(json["score"], 0);
		assert_eq!(json["state"], "running");
		Ok(())
	}
}
