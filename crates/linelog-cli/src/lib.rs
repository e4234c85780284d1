//! Hosting-process glue: map CLI arguments onto linelog configuration.

pub mod cli;

use clap::ColorChoice;
use linelog::{ColorMode, Config, Level};

use crate::cli::Cli;

/// Build the logger configuration from parsed CLI flags.
pub fn config_from_cli(cli: &Cli) -> Config {
    let mut config = Config::default()
        .with_min_level(Level::resolve(&cli.min_level))
        .with_color(color_mode(cli.color.color))
        .with_log_file(cli.log_file.clone());
    if let Some(format) = &cli.timestamp_format {
        config = config.with_timestamp_format(format.clone());
    }
    config
}

/// Map the clap color choice onto the library's color mode.
pub fn color_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}
