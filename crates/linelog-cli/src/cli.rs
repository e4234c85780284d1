//! CLI argument definitions for the linelog tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "linelog",
    version,
    about = "Leveled line logger - emit formatted log lines and time commands",
    long_about = "Emit log lines of the shape `<timestamp> [<LEVEL>]: <label> - <message>`\n\
                  to stderr or a file, filtered by a minimum level, with optional ANSI\n\
                  color on the level tag. The `time` command wraps an external command\n\
                  with start/finish lines and propagates its exit code."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Minimum level a line must pass to be written. Accepts the usual
    /// aliases (err, warning, dbg, trc); unrecognized names fall back to
    /// info.
    #[arg(
        long = "min-level",
        value_name = "LEVEL",
        default_value = "info",
        global = true
    )]
    pub min_level: String,

    /// chrono format string for line timestamps.
    #[arg(long = "timestamp-format", value_name = "FORMAT", global = true)]
    pub timestamp_format: Option<String>,

    /// Append lines to a file instead of writing to stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write one log line.
    Emit(EmitArgs),

    /// Run a command and log its start, duration, and outcome.
    Time(TimeArgs),
}

#[derive(Parser)]
pub struct EmitArgs {
    /// Level to log at (error, warn, info, debug, trace, or an alias).
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub level: String,

    /// Label naming the phase or component the line belongs to.
    #[arg(long, value_name = "NAME", default_value = linelog::DEFAULT_LABEL)]
    pub label: String,

    /// Message words, joined with single spaces.
    #[arg(value_name = "MESSAGE")]
    pub message: Vec<String>,
}

#[derive(Parser)]
pub struct TimeArgs {
    /// Level for the start and done lines (failures always log at error).
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub level: String,

    /// Label naming the phase or component the lines belong to.
    #[arg(long, value_name = "NAME", default_value = linelog::DEFAULT_LABEL)]
    pub label: String,

    /// Human-readable description of what the command does.
    #[arg(value_name = "DESCRIPTION")]
    pub description: String,

    /// Command to run, given after `--`.
    #[arg(value_name = "COMMAND", required = true, last = true)]
    pub command: Vec<String>,
}
