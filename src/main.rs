//! TailSleuth: find and follow the newest log file, or measure line rates.
//!
//! Thin binary entry point. All logic lives in the `tailsleuth-core`
//! and `tailsleuth-cli` crates.
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = tailsleuth_cli::Cli::parse();

    // Initialise structured logging. Logs share stderr with status output,
    // so the default level stays quiet.
    init_logging(cli.verbose);

    tracing::debug!("TailSleuth starting");
    tailsleuth_cli::run(cli)
}

/// `RUST_LOG` wins; otherwise `-v` flags pick the level.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
