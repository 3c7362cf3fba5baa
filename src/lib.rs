//! Snake game library.
//!
//! The game rules live in the [`game`] crate, this one wraps them into a
//! window.

#![warn(missing_docs)]

pub mod app;
pub mod settings;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
