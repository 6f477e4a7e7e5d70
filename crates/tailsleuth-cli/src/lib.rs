//! TailSleuth CLI: command-line frontend.
//!
//! This crate contains argument parsing, output rendering, and the command
//! drivers. Business logic lives in `tailsleuth-core`.
pub mod args;
pub mod commands;
pub mod render;

pub use args::{Cli, Command};

use clap::CommandFactory;

/// Execute the parsed command line.
///
/// With no subcommand, prints help and succeeds.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = cli.resolve_config()?;
    tracing::debug!("Resolved configuration: {config:?}");

    match command {
        Command::List { format, .. } => commands::list::run(&config, format),
        Command::Tail { .. } => commands::tail::run(&config),
        Command::Rate { .. } => commands::rate::run(&config),
    }
}
