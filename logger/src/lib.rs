//! Helper crate for fast log initializing.
//!
//! This crate reexports all macros from [`log`] crate and uses [`env_logger`]
//! crate for logger initializing.
//!
//! Example:
//! ```rust
//! use logger::*;
//!
//! init_logger();
//!
//! info!("Logger initialized successfully!");
//! ```

pub use log::{debug, error, info, trace, warn};

/// Default log level for debug compilations.
const DEBUG_LOG_LEVEL: &str = "trace";

/// Default log level for release compilations.
const RELEASE_LOG_LEVEL: &str = "info";

/// Environment variable for log level setting.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable for log style setting.
pub const LOG_STYLE_ENV: &str = "LOG_STYLE";

/// Default log style.
const LOG_STYLE: &str = "auto";

use env_logger::fmt::{Color, Formatter};
use log::{Level, Record};
use std::io::{self, Write};

/// Logger initializer. Run this function in binary crate to initialize logging.
/// Calling it again does nothing.
pub fn init_logger() {
	let _ = builder().try_init();
}

/// Return the log level used when [`LOG_LEVEL_ENV`] is not set.
pub fn default_level() -> &'static str {
	match cfg!(debug_assertions) {
		true => DEBUG_LOG_LEVEL,
		false => RELEASE_LOG_LEVEL,
	}
}

fn builder() -> env_logger::Builder {
	let mut builder = env_logger::Builder::from_env(
		env_logger::Env::default()
			.filter_or(LOG_LEVEL_ENV, default_level())
			.write_style_or(LOG_STYLE_ENV, LOG_STYLE),
	);
	builder.format(format);
	builder
}

/// Logging output format.
fn format(buf: &'_ mut Formatter, record: &'_ Record<'_>) -> io::Result<()> {
	let mut style = buf.style();
	match record.level() {
		Level::Error => style.set_color(Color::Red).set_bold(true),
		Level::Warn => style.set_color(Color::Yellow),
		Level::Info => style.set_color(Color::Cyan),
		Level::Debug => style.set_color(Color::Magenta),
		Level::Trace => style.set_color(Color::Blue),
	};

	writeln!(
		buf,
		"{}\t{}: {}",
		style.value(record.level()),
		record.target(),
		record.args()
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn init_twice() {
		init_logger();
		init_logger();
		info!("logger is still usable");
	}

	#[test]
	fn level_depends_on_profile() {
		if cfg!(debug_assertions) {
			assert_eq!(default_level(), "trace");
		} else {
			assert_eq!(default_level(), "info");
		}
	}
}
