//! Auxiliary abstractions.

use crate::error::*;
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

/// Position of a grid cell.
///
/// Note that this coordinates system is the screen one, so (0, 0) point is the
/// top left corner of the board and Y-axis is going down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Position {
    /// Coordinate relative to the abscissa axis.
    pub x: i32,

    /// Coordinate relative to the ordinate axis.
    pub y: i32,
}

impl Position {
    /// Zero position, also used as a stationary step.
    pub const ZERO: Position = Position { x: 0, y: 0 };

    /// Return a new [`Position`].
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from(t: (i32, i32)) -> Self {
        Self::new(t.0, t.1)
    }
}

impl Position {
    /// Build a step from raw components.
    ///
    /// No components means no input, so the result is none and the snake
    /// keeps its last step. Anything but zero or two components is rejected
    /// with [`GameError::InvalidStep`].
    pub fn from_step(components: &[i32]) -> std::result::Result<Option<Self>, GameError> {
        match *components {
            [] => Ok(None),
            [x, y] => Ok(Some(Self::new(x, y))),
            _ => Err(GameError::InvalidStep(components.len())),
        }
    }
}

/// Components wrap around on overflow. Any grid is far smaller than the `i32`
/// range, so a wrapped head is still outside of it.
impl ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

impl ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl ops::Neg for Position {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Structure which determines direction of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Up.
    Up,

    /// Down.
    Down,

    /// Left.
    Left,

    /// Right.
    Right,
}

impl Direction {
    /// All directions.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Return opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Return unit step on the grid.
    pub fn step(self) -> Position {
        match self {
            Self::Up => Position::new(0, -1),
            Self::Down => Position::new(0, 1),
            Self::Left => Position::new(-1, 0),
            Self::Right => Position::new(1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_case = format!("{:?}", self).to_lowercase();
        write!(f, "{}", lower_case)
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            _ => Err(ParseDirectionError),
        }
    }
}

impl ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

/// A color in the sRGB color space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Color {
    /// Red component
    pub r: u8,

    /// Green component
    pub g: u8,

    /// Blue component
    pub b: u8,

    /// Transparency
    pub a: u8,
}

impl Color {
    /// Board background.
    pub const BACKGROUND: Color = Color::new(65, 65, 65, 255);

    /// Snake body.
    pub const SNAKE: Color = Color::new(19, 168, 28, 255);

    /// Food.
    pub const FOOD: Color = Color::new(209, 8, 65, 255);

    /// Return a new [`Color`]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
