//! Errors returned by functions related to this crate.

use std::{error, fmt};

/// Error type returned by crate's functions.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Step with the number of components specified in variant argument
    /// instead of two.
    InvalidStep(usize),

    /// Grid size specified in variant argument is not `WxH` with both
    /// dimensions greater than zero.
    InvalidGridSize(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStep(len) => write!(f,
				"step must have exactly 2 components, got {}", len),
            Self::InvalidGridSize(size) => write!(f,
				"can't use {:?} as grid size, expected something like \"40x30\"", size),
        }
    }
}

impl error::Error for GameError {}

/// Error returned if can't parse [`Direction`](crate::aux::Direction) from a
/// string.
#[derive(Debug, Clone)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
"can't parse Direction because parsed string is not \"up\", \"down\", \"left\" or \"right\"")
    }
}

impl error::Error for ParseDirectionError {}
