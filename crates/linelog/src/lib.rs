//! Leveled line logging for command-line tools.
//!
//! `linelog` renders log records as single lines of the shape
//! `<timestamp> [<LEVEL>]: <label> - <message>`, filters them against a
//! configured minimum level, and writes them synchronously to a configurable
//! sink (stderr by default) with optional ANSI color on the level tag. Two
//! utilities build on the emitter: [`SampleCounter`] emits every Nth
//! occurrence of a recurring event, and [`time_command`] wraps an external
//! command with start/finish lines and exit-status propagation.
//!
//! No log call aborts the hosting process: unrecognized level names resolve
//! to info, capability-query failures degrade to plain ANSI sequences, and
//! the only errors surfaced are sink write failures.
//!
//! ```no_run
//! use linelog::{Config, Level, Logger};
//!
//! # fn main() -> std::io::Result<()> {
//! let mut logger = Logger::new(Config::default().with_min_level(Level::Debug))?;
//! logger.info("ingest", "starting run")?;
//! logger.debug("scan", "found 42 candidates")?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod config;
pub mod format;
pub mod level;
pub mod logger;
pub mod sample;
pub mod timed;

pub use color::{Capability, CapabilitySource, ColorMode, Palette, ParseColorModeError, Tput};
pub use config::{Config, DEFAULT_TIMESTAMP_FORMAT};
pub use format::render;
pub use level::Level;
pub use logger::{DEFAULT_LABEL, Logger};
pub use sample::SampleCounter;
pub use timed::time_command;
