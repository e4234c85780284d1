//! The emitter: level filtering, record assembly, and the single sink write.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Write};

use chrono::Local;

use crate::color::{CapabilitySource, ColorMode, Palette, Tput};
use crate::config::Config;
use crate::format;
use crate::level::Level;

/// Label used for lines whose hosting process does not name a phase.
pub const DEFAULT_LABEL: &str = "main";

type TimestampSource = Box<dyn Fn(&str) -> String + Send>;

/// Synchronous line logger writing to a single configured sink.
///
/// Construction decides the color question once and caches the palette;
/// steady-state emission reads configuration but never mutates it. The
/// hosting process may change configuration between calls through the
/// `set_*` methods.
pub struct Logger {
    config: Config,
    sink: Box<dyn Write + Send>,
    interactive: bool,
    palette: Option<Palette>,
    timestamp: TimestampSource,
}

impl Logger {
    /// Build a logger per `config`: append to `config.log_file` when set,
    /// otherwise write to stderr.
    ///
    /// # Errors
    ///
    /// Returns an error when the log file cannot be opened.
    pub fn new(config: Config) -> io::Result<Logger> {
        match &config.log_file {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(Self::with_writer(config, Box::new(file), false))
            }
            None => {
                let interactive = io::stderr().is_terminal();
                Ok(Self::with_writer(config, Box::new(io::stderr()), interactive))
            }
        }
    }

    /// Build a logger over a custom sink (useful for testing).
    ///
    /// `interactive` states whether the sink is attached to an interactive
    /// terminal; the `Auto` color mode consults it.
    pub fn with_writer(config: Config, sink: Box<dyn Write + Send>, interactive: bool) -> Logger {
        let palette = resolve_palette(&config, interactive, &Tput);
        Logger {
            config,
            sink,
            interactive,
            palette,
            timestamp: Box::new(|format| Local::now().format(format).to_string()),
        }
    }

    /// Replace the timestamp source (useful for testing against a fixed
    /// clock). The source receives the configured format string.
    #[must_use]
    pub fn with_timestamp_source(
        mut self,
        source: impl Fn(&str) -> String + Send + 'static,
    ) -> Logger {
        self.timestamp = Box::new(source);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the color decision for this sink came out enabled.
    pub fn color_enabled(&self) -> bool {
        self.palette.is_some()
    }

    /// Change the minimum level between calls.
    pub fn set_min_level(&mut self, level: Level) {
        self.config.min_level = level;
    }

    /// Change the timestamp format between calls.
    pub fn set_timestamp_format(&mut self, format: impl Into<String>) {
        self.config.timestamp_format = format.into();
    }

    /// Change the color mode, re-deciding color and re-resolving the palette.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.config.color = mode;
        self.palette = resolve_palette(&self.config, self.interactive, &Tput);
    }

    /// Emit one record, or nothing when the minimum level filters it out.
    ///
    /// Filtering short-circuits before any timestamp or formatting work.
    /// The rendered line goes to the sink in a single write.
    ///
    /// # Errors
    ///
    /// Sink write failures propagate untouched; they are the caller's to
    /// handle, not the logger's to mask.
    pub fn log(&mut self, level: Level, label: &str, message: &str) -> io::Result<()> {
        if !self.config.min_level.permits(level) {
            return Ok(());
        }
        let timestamp = (self.timestamp)(&self.config.timestamp_format);
        let line = format::render(&timestamp, level, label, message, self.palette.as_ref());
        self.sink.write_all(line.as_bytes())
    }

    /// Emit at [`Level::Error`].
    pub fn error(&mut self, label: &str, message: &str) -> io::Result<()> {
        self.log(Level::Error, label, message)
    }

    /// Emit at [`Level::Warn`].
    pub fn warn(&mut self, label: &str, message: &str) -> io::Result<()> {
        self.log(Level::Warn, label, message)
    }

    /// Emit at [`Level::Info`].
    pub fn info(&mut self, label: &str, message: &str) -> io::Result<()> {
        self.log(Level::Info, label, message)
    }

    /// Emit at [`Level::Debug`].
    pub fn debug(&mut self, label: &str, message: &str) -> io::Result<()> {
        self.log(Level::Debug, label, message)
    }

    /// Emit at [`Level::Trace`].
    pub fn trace(&mut self, label: &str, message: &str) -> io::Result<()> {
        self.log(Level::Trace, label, message)
    }
}

fn resolve_palette(
    config: &Config,
    interactive: bool,
    source: &dyn CapabilitySource,
) -> Option<Palette> {
    config
        .color
        .enabled(interactive)
        .then(|| Palette::resolve(source))
}
