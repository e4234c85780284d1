//! Logger configuration, established by the hosting process.

use std::path::PathBuf;

use crate::color::ColorMode;
use crate::level::Level;

/// Default timestamp format: date and time to the second.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Configuration for a [`Logger`](crate::Logger).
///
/// The hosting process establishes these values once at startup; the logger
/// never mutates them during emission. Changing them between calls goes
/// through the logger's `set_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum level a record must pass to be emitted.
    pub min_level: Level,
    /// chrono format string for the line timestamp.
    pub timestamp_format: String,
    /// When to colorize the level tag.
    pub color: ColorMode,
    /// Optional log file path. When set, lines are appended to the file
    /// instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_level: Level::Info,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            color: ColorMode::Auto,
            log_file: None,
        }
    }
}

impl Config {
    /// Set the minimum level.
    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Set the timestamp format string.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Set the color mode.
    #[must_use]
    pub fn with_color(mut self, mode: ColorMode) -> Self {
        self.color = mode;
        self
    }

    /// Set the log file path (lines go to stderr when `None`).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.min_level, Level::Info);
        assert_eq!(config.timestamp_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn builders_override_fields() {
        let config = Config::default()
            .with_min_level(Level::Trace)
            .with_timestamp_format("%H:%M")
            .with_color(ColorMode::Never)
            .with_log_file(Some(PathBuf::from("run.log")));
        assert_eq!(config.min_level, Level::Trace);
        assert_eq!(config.timestamp_format, "%H:%M");
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("run.log")));
    }
}
