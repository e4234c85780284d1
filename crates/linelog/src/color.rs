//! Color decision policy and the escape-sequence palette for level tags.
//!
//! The palette is resolved through [`CapabilitySource`], the seam to the
//! terminal capability facility. The default source, [`Tput`], shells out to
//! `tput`; a missing binary or nonzero exit is an unanswered query and the
//! affected entries degrade to hard-coded ANSI sequences. Color never turns
//! into an error.

use std::env;
use std::fmt;
use std::process::Command;
use std::str::FromStr;

use thiserror::Error;

use crate::level::Level;

/// Hard-coded ANSI fallbacks for unanswered capability queries.
const ANSI_RESET: &str = "\x1b[0m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_FAINT: &str = "\x1b[2m";

/// Environment variable that disables color when set non-empty.
const DISABLE_VAR: &str = "NO_COLOR";
/// Environment variable that forces color when set non-empty.
const FORCE_VAR: &str = "CLICOLOR_FORCE";

/// When to colorize the level tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Colorize when the sink is an interactive terminal.
    #[default]
    Auto,
    /// Colorize unconditionally (still overridden by `NO_COLOR`).
    Always,
    /// Never colorize.
    Never,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }

    /// Decide whether color is on for a sink.
    ///
    /// Precedence: `Never` or a non-empty `NO_COLOR` disable color outright;
    /// otherwise `Always` or a non-empty `CLICOLOR_FORCE` enable it;
    /// otherwise `Auto` follows `interactive`.
    pub fn enabled(&self, interactive: bool) -> bool {
        decide(*self, interactive, env_flag(DISABLE_VAR), env_flag(FORCE_VAR))
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(ParseColorModeError(s.to_string())),
        }
    }
}

/// Error returned when a color mode string is not `auto`, `always`, or
/// `never`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized color mode `{0}` (expected auto, always, or never)")]
pub struct ParseColorModeError(String);

fn env_flag(name: &str) -> bool {
    env::var_os(name).is_some_and(|value| !value.is_empty())
}

fn decide(mode: ColorMode, interactive: bool, disabled: bool, forced: bool) -> bool {
    if disabled || mode == ColorMode::Never {
        return false;
    }
    if forced || mode == ColorMode::Always {
        return true;
    }
    interactive
}

/// A single terminal capability request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The attribute-reset sequence (`sgr0`).
    Reset,
    /// The foreground sequence for a color index (`setaf N`).
    Foreground(u8),
    /// The number of colors the terminal supports (`colors`).
    Colors,
}

/// The terminal capability facility: a capability in, a control sequence (or
/// count) out, or `None` when the facility cannot answer.
pub trait CapabilitySource {
    fn query(&self, capability: Capability) -> Option<String>;
}

/// Capability source backed by the `tput` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tput;

impl Tput {
    fn run(args: &[&str]) -> Option<String> {
        let output = Command::new("tput").args(args).output().ok()?;
        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl CapabilitySource for Tput {
    fn query(&self, capability: Capability) -> Option<String> {
        match capability {
            Capability::Reset => Self::run(&["sgr0"]),
            Capability::Foreground(index) => Self::run(&["setaf", &index.to_string()]),
            Capability::Colors => Self::run(&["colors"]),
        }
    }
}

/// Resolved escape sequences for the colorized levels.
///
/// `Info` has no entry; its tag is never wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    reset: String,
    error: String,
    warn: String,
    debug: String,
    trace: String,
}

impl Palette {
    /// Resolve the palette through the capability facility.
    ///
    /// `Error` is red (index 1) and `Warn` yellow (index 3). `Debug` uses
    /// bright black (index 8) on terminals reporting 16 or more colors and
    /// the faint attribute otherwise; `Trace` is always faint. Every
    /// unanswered query falls back to the hard-coded ANSI sequence.
    pub fn resolve(source: &dyn CapabilitySource) -> Palette {
        let reset = query_or(source, Capability::Reset, ANSI_RESET);
        let error = query_or(source, Capability::Foreground(1), ANSI_RED);
        let warn = query_or(source, Capability::Foreground(3), ANSI_YELLOW);
        let debug = if color_count(source) >= 16 {
            query_or(source, Capability::Foreground(8), ANSI_FAINT)
        } else {
            ANSI_FAINT.to_string()
        };
        Palette {
            reset,
            error,
            warn,
            debug,
            trace: ANSI_FAINT.to_string(),
        }
    }

    /// Start sequence for a level's tag; `None` for levels that stay plain.
    pub fn start(&self, level: Level) -> Option<&str> {
        match level {
            Level::Error => Some(&self.error),
            Level::Warn => Some(&self.warn),
            Level::Debug => Some(&self.debug),
            Level::Trace => Some(&self.trace),
            Level::Info => None,
        }
    }

    /// The attribute-reset sequence closing a wrapped tag.
    pub fn reset(&self) -> &str {
        &self.reset
    }
}

fn query_or(source: &dyn CapabilitySource, capability: Capability, fallback: &str) -> String {
    source
        .query(capability)
        .unwrap_or_else(|| fallback.to_string())
}

fn color_count(source: &dyn CapabilitySource) -> u32 {
    source
        .query(Capability::Colors)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}
