//! Rate estimation over a stream of line events.
//!
//! Each input line is one event. Events feed a bounded [`RateWindow`]; at
//! every tick the window's rate is folded into [`RunningStats`] and a status
//! line is rendered by [`StatusWriter`].
pub mod reporter;
pub mod stats;
pub mod window;

pub use reporter::{Clock, MonotonicClock, RateMeter, StatusSnapshot, StatusWriter};
pub use stats::RunningStats;
pub use window::RateWindow;

use crate::config::Config;
use crate::error::{Error, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSummary {
    pub events: u64,
    pub ticks: u64,
    pub total_units: f64,
    pub mean: f64,
    pub stddev: f64,
}

/// Consume `input` to end of stream, writing status lines to `status`.
///
/// Line content is never inspected: empty lines, invalid UTF-8, and a final
/// unterminated line each count as one event. A trailing newline is written
/// to `status` when the stream ends, including when reading fails.
pub fn run_rate<R, W, C>(
    mut input: R,
    status: W,
    config: &Config,
    clock: &C,
) -> Result<RateSummary>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    let mut meter = RateMeter::new(config, clock.now());
    let mut writer = StatusWriter::new(status);
    let mut line = Vec::new();

    loop {
        line.clear();
        match input.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                let _ = writer.finish();
                return Err(Error::Input(e));
            }
        }

        if let Some(snapshot) = meter.observe(clock.now()) {
            writer.write_status(&snapshot).map_err(Error::Output)?;
        }
    }

    writer.finish().map_err(Error::Output)?;

    let stats = meter.stats();
    let summary = RateSummary {
        events: meter.events(),
        ticks: stats.sample_count(),
        total_units: meter.total_units(),
        mean: stats.mean(),
        stddev: stats.stddev(),
    };
    debug!(
        "Rate input ended: {} events, {} ticks",
        summary.events, summary.ticks
    );
    Ok(summary)
}
