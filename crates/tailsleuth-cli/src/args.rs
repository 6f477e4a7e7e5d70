//! Command-line definitions.
//!
//! Flags only override what they name: an absent flag leaves the value from
//! the config file (or the built-in default) in place.
use crate::render::OutputFormat;
use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tailsleuth_core::Config;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tailsleuth",
    version,
    about = "Find and follow the newest log file, or measure the rate of lines on stdin"
)]
pub struct Cli {
    /// Root directory searched for log files
    #[arg(long, global = true, env = "TAILSLEUTH_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(long, global = true, env = "TAILSLEUTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List recent log files, newest first
    List {
        /// Maximum number of files to list [default: 10]
        #[arg(long)]
        max_print: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show the end of the most recent log file
    Tail {
        /// Follow the file as it grows
        #[arg(short, long)]
        follow: bool,
    },

    /// Estimate the arrival rate of lines on stdin
    Rate {
        /// Window size for rate calculation [default: 10]
        #[arg(short, long)]
        window: Option<usize>,

        /// Update interval in seconds [default: 1.0]
        #[arg(short, long)]
        interval: Option<f64>,

        /// Increment size per line [default: 1.0]
        #[arg(short, long)]
        size: Option<f64>,
    },
}

impl Cli {
    /// Defaults, then the config file, then flags; validated.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(dir) = &self.log_dir {
            config.log_dir = dir.clone();
        }

        match &self.command {
            Some(Command::List { max_print, .. }) => {
                if let Some(n) = max_print {
                    config.max_files_listed = *n;
                }
            }
            Some(Command::Tail { follow }) => {
                config.follow |= *follow;
            }
            Some(Command::Rate {
                window,
                interval,
                size,
            }) => {
                if let Some(w) = window {
                    config.window_size = *w;
                }
                if let Some(i) = interval {
                    config.report_interval_seconds = *i;
                }
                if let Some(s) = size {
                    config.unit_size = *s;
                }
            }
            None => {}
        }

        config.validate().context("rejected command-line options")?;
        Ok(config)
    }
}
