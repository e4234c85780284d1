//! linelog CLI entry point.

use anyhow::Context;
use clap::Parser;
use linelog::{Level, Logger, time_command};
use linelog_cli::cli::{Cli, Command};
use linelog_cli::config_from_cli;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = config_from_cli(&cli);
    let mut logger = Logger::new(config).context("failed to open log sink")?;
    match cli.command {
        Command::Emit(args) => {
            logger
                .log(
                    Level::resolve(&args.level),
                    &args.label,
                    &args.message.join(" "),
                )
                .context("failed to write log line")?;
            Ok(0)
        }
        Command::Time(args) => {
            let (program, rest) = args
                .command
                .split_first()
                .context("no command given after `--`")?;
            let code = time_command(
                &mut logger,
                Level::resolve(&args.level),
                &args.label,
                &args.description,
                program,
                rest,
            )
            .context("failed to write log line")?;
            Ok(code)
        }
    }
}
