//! Command line settings.

use crate::Result;
use clap::{App, Arg, ArgMatches};
use game::{aux::Direction, grid::Grid, Settings as GameSettings};
use std::{error, fmt, time::Duration};

/// Default grid size argument.
pub const GRID_SIZE: &str = "40x30";

/// Default delay between two moves of the snake.
pub const DELAY: &str = "150ms";

/// Default size of one cell in pixels.
pub const CELL: &str = "20";

/// Everything the game window needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
	/// Game rules settings.
	pub game: GameSettings,

	/// Delay between two ticks.
	pub delay: Duration,

	/// Cell side in pixels.
	pub cell: f32,

	/// Log every frame as json.
	pub debug_frames: bool,
}

impl Settings {
	/// Build [`Settings`] from parsed command line arguments.
	pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
		let grid: Grid = matches.value_of("grid_size").unwrap_or(GRID_SIZE).parse()?;
		let delay: Duration = matches
			.value_of("delay")
			.unwrap_or(DELAY)
			.parse::<humantime::Duration>()?
			.into();
		let initial_direction = match matches.value_of("direction") {
			Some(val) => Some(val.parse::<Direction>()?),
			None => GameSettings::INITIAL_DIRECTION,
		};
		let cell = matches.value_of("cell").unwrap_or(CELL);
		let cell = match cell.parse::<f32>() {
			Ok(val) if val > 0.0 && val.is_finite() => val,
			_ => return Err(Box::new(SettingsError::InvalidCell(cell.to_string()))),
		};

		Ok(Self {
			game: GameSettings {
				grid,
				initial_direction,
			},
			delay,
			cell,
			debug_frames: matches.is_present("debug_frames"),
		})
	}
}

/// Return command line interface of the game.
pub fn cli<'a, 'b>() -> App<'a, 'b> {
	App::new("Snake")
		.about("Classic snake game. Arrows or WASD to steer, Space to pause, R to restart, Escape to quit")
		.arg(
			Arg::with_name("grid_size")
				.short("g")
				.long("grid-size")
				.value_name("SIZE")
				.default_value(GRID_SIZE)
				.help("Game grid size in cells"),
		)
		.arg(
			Arg::with_name("delay")
				.short("d")
				.long("delay")
				.value_name("DURATION")
				.default_value(DELAY)
				.help("Delay between two moves of the snake"),
		)
		.arg(
			Arg::with_name("cell")
				.short("c")
				.long("cell")
				.value_name("PIXELS")
				.default_value(CELL)
				.help("Size of one grid cell on the screen"),
		)
		.arg(
			Arg::with_name("direction")
				.long("direction")
				.value_name("DIRECTION")
				.possible_values(&["up", "down", "left", "right"])
				.help("Direction the snake starts moving in. By default it waits for the first key"),
		)
		.arg(
			Arg::with_name("debug_frames")
				.long("debug-frames")
				.help("Log every frame as json at trace level"),
		)
}

/// Error returned if a command line argument makes no sense.
#[derive(Debug, Clone)]
pub enum SettingsError {
	/// Cell size specified in variant argument is not a positive number.
	InvalidCell(String),
}

impl fmt::Display for SettingsError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidCell(cell) => {
				write!(f, "cell size must be a positive number of pixels, got {:?}", cell)
			}
		}
	}
}

impl error::Error for SettingsError {}
