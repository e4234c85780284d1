//! Severity levels and the alias table for level names arriving as strings.

use std::fmt;

/// Log severity, from most severe (`Error`) to most verbose (`Trace`).
///
/// A record passes the filter when its level is at least as severe as the
/// configured minimum; see [`Level::permits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Failures that need attention.
    Error,
    /// Non-fatal issues.
    Warn,
    /// Normal progress lines.
    #[default]
    Info,
    /// Detailed processing information.
    Debug,
    /// High-volume diagnostics.
    Trace,
}

impl Level {
    /// All levels in severity order, most severe first.
    pub const ALL: [Level; 5] = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Returns the canonical uppercase tag used in rendered lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    /// Ordinal severity; lower is more severe.
    pub fn severity(&self) -> u8 {
        match self {
            Level::Error => 0,
            Level::Warn => 1,
            Level::Info => 2,
            Level::Debug => 3,
            Level::Trace => 4,
        }
    }

    /// Resolve a level name or alias, case-insensitively.
    ///
    /// Unrecognized names resolve to `Info`. This is the boundary where
    /// external strings (CLI flags, environment values) enter the system;
    /// a level name is never worth rejecting a log line over.
    pub fn resolve(name: &str) -> Level {
        match name.trim().to_uppercase().as_str() {
            "ERROR" | "ERR" => Level::Error,
            "WARN" | "WARNING" => Level::Warn,
            "INFO" => Level::Info,
            "DEBUG" | "DBG" => Level::Debug,
            "TRACE" | "TRC" => Level::Trace,
            _ => Level::Info,
        }
    }

    /// Returns true when a record at `candidate` passes a minimum level of
    /// `self`.
    pub fn permits(&self, candidate: Level) -> bool {
        candidate.severity() <= self.severity()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_error_to_trace() {
        for window in Level::ALL.windows(2) {
            assert!(window[0].severity() < window[1].severity());
        }
    }

    #[test]
    fn permits_matches_severity_ordering() {
        for minimum in Level::ALL {
            for candidate in Level::ALL {
                assert_eq!(
                    minimum.permits(candidate),
                    candidate.severity() <= minimum.severity(),
                    "minimum {minimum} candidate {candidate}"
                );
            }
        }
    }

    #[test]
    fn error_minimum_admits_only_error() {
        assert!(Level::Error.permits(Level::Error));
        assert!(!Level::Error.permits(Level::Warn));
        assert!(!Level::Error.permits(Level::Info));
        assert!(!Level::Error.permits(Level::Debug));
        assert!(!Level::Error.permits(Level::Trace));
    }

    #[test]
    fn aliases_resolve_to_canonical_levels() {
        let table = [
            ("error", Level::Error),
            ("ERR", Level::Error),
            ("warn", Level::Warn),
            ("Warning", Level::Warn),
            ("info", Level::Info),
            ("debug", Level::Debug),
            ("dbg", Level::Debug),
            ("trace", Level::Trace),
            ("trc", Level::Trace),
            (" trace ", Level::Trace),
        ];
        for (name, expected) in table {
            assert_eq!(Level::resolve(name), expected, "alias {name}");
            assert_eq!(
                Level::resolve(name).severity(),
                expected.severity(),
                "alias {name} ordinal"
            );
        }
    }

    #[test]
    fn unrecognized_names_resolve_to_info() {
        assert_eq!(Level::resolve("verbose"), Level::Info);
        assert_eq!(Level::resolve(""), Level::Info);
        assert_eq!(Level::resolve("   "), Level::Info);
    }

    #[test]
    fn display_uses_uppercase_tag() {
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(Level::Trace.to_string(), "TRACE");
    }
}
