//! `tailsleuth rate`: live arrival-rate statistics for lines on stdin.
use anyhow::Context;
use std::io::{self, Write};
use tailsleuth_core::rate::{run_rate, MonotonicClock};
use tailsleuth_core::Config;
use tracing::info;

/// Exit status after Ctrl-C, matching the shell convention of 128 + SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

pub fn run(config: &Config) -> anyhow::Result<()> {
    // Reading stdin cannot be interrupted in-band; end the status line and
    // leave.
    ctrlc::set_handler(|| {
        let _ = io::stderr().write_all(b"\n");
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })
    .context("failed to install Ctrl-C handler")?;

    let summary = run_rate(
        io::stdin().lock(),
        io::stderr(),
        config,
        &MonotonicClock::default(),
    )?;
    info!(
        events = summary.events,
        ticks = summary.ticks,
        mean = summary.mean,
        "Input stream ended"
    );
    Ok(())
}
