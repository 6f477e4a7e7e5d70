//! Periodic reporter: decides when a tick happens and renders the status
//! line.
//!
//! There is no timer. Every observed event checks whether the report
//! interval has elapsed since the previous tick, so tick spacing is at least
//! the interval and jitters with input arrival. With no input, nothing is
//! printed.
use crate::config::Config;
use crate::rate::{RateWindow, RunningStats};
use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

/// Source of event timestamps, in seconds.
///
/// Only differences between readings are used, so the origin is arbitrary.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Monotonic clock measuring seconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Figures emitted on one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusSnapshot {
    pub total_units: f64,
    pub current: f64,
    pub mean: f64,
    pub stddev: f64,
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {:.0} | Current: {:.2} | μ: {:.2} | σ: {:.2} u/s",
            self.total_units, self.current, self.mean, self.stddev
        )
    }
}

/// Window, statistics, and tick bookkeeping for one run.
#[derive(Debug, Clone)]
pub struct RateMeter {
    window: RateWindow,
    stats: RunningStats,
    events: u64,
    unit_size: f64,
    interval: f64,
    last_tick: f64,
}

impl RateMeter {
    /// `started_at` is the reference for the first tick.
    pub fn new(config: &Config, started_at: f64) -> Self {
        Self {
            window: RateWindow::new(config.window_size, config.unit_size),
            stats: RunningStats::new(),
            events: 0,
            unit_size: config.unit_size,
            interval: config.report_interval_seconds,
            last_tick: started_at,
        }
    }

    /// Record one event at `now`. Returns a snapshot when this event crosses
    /// a tick boundary.
    pub fn observe(&mut self, now: f64) -> Option<StatusSnapshot> {
        self.events += 1;
        self.window.observe(now);

        if now - self.last_tick < self.interval {
            return None;
        }

        let current = self.window.current_rate();
        self.stats.add_sample(current);
        self.last_tick = now;

        Some(StatusSnapshot {
            total_units: self.total_units(),
            current,
            mean: self.stats.mean(),
            stddev: self.stats.stddev(),
        })
    }

    pub fn events(&self) -> u64 {
        self.events
    }

    pub fn total_units(&self) -> f64 {
        self.events as f64 * self.unit_size
    }

    pub fn stats(&self) -> &RunningStats {
        &self.stats
    }
}

/// Writes status lines that overwrite each other in place.
///
/// Each line starts with `\r`. When a line is shorter than its predecessor
/// it is padded with spaces so no stale characters remain on the terminal.
pub struct StatusWriter<W: Write> {
    out: W,
    last_width: usize,
}

impl<W: Write> StatusWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_width: 0 }
    }

    pub fn write_status(&mut self, snapshot: &StatusSnapshot) -> io::Result<()> {
        let line = snapshot.to_string();
        let width = line.chars().count();
        let pad = self.last_width.saturating_sub(width);
        // Single write per frame; log output may share this stream.
        let frame = format!("\r{line}{:pad$}", "");
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        self.last_width = width;
        Ok(())
    }

    /// Terminate the status line.
    pub fn finish(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(window_size: usize, interval: f64, unit_size: f64) -> Config {
        Config {
            window_size,
            report_interval_seconds: interval,
            unit_size,
            ..Config::default()
        }
    }

    #[test]
    fn status_line_format() {
        let snap = StatusSnapshot {
            total_units: 1234.0,
            current: 5.0,
            mean: 4.256,
            stddev: std::f64::consts::SQRT_2,
        };
        assert_eq!(
            snap.to_string(),
            "Total: 1234 | Current: 5.00 | μ: 4.26 | σ: 1.41 u/s"
        );
    }

    #[test]
    fn no_tick_before_interval_elapses() {
        let mut meter = RateMeter::new(&config(10, 1.0, 1.0), 0.0);
        assert!(meter.observe(0.2).is_none());
        assert!(meter.observe(0.9).is_none());
        assert_eq!(meter.stats().sample_count(), 0);
        assert_eq!(meter.events(), 2);
    }

    #[test]
    fn tick_on_exact_interval_boundary() {
        let mut meter = RateMeter::new(&config(10, 1.0, 1.0), 0.0);
        meter.observe(0.5);
        let snap = meter.observe(1.0).expect("tick at 1.0");
        assert_eq!(snap.current, 2.0);
        assert_eq!(snap.total_units, 2.0);
        assert_eq!(meter.stats().sample_count(), 1);
    }

    #[test]
    fn one_sample_per_tick_and_interval_restarts() {
        let mut meter = RateMeter::new(&config(2, 1.0, 1.0), 0.0);
        meter.observe(0.5);
        assert!(meter.observe(1.0).is_some());
        assert!(meter.observe(1.75).is_none());
        let snap = meter.observe(2.0).expect("second tick");
        assert_eq!(snap.current, 4.0);
        assert_eq!(snap.mean, 3.0);
        assert!((snap.stddev - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(meter.stats().sample_count(), 2);
    }

    #[test]
    fn first_event_after_a_long_gap_ticks_with_zero_rate() {
        let mut meter = RateMeter::new(&config(10, 1.0, 1.0), 0.0);
        let snap = meter.observe(5.0).expect("tick");
        assert_eq!(snap.current, 0.0);
        assert_eq!(snap.stddev, 0.0);
    }

    #[test]
    fn total_units_uses_unit_size() {
        let mut meter = RateMeter::new(&config(10, 1.0, 0.5), 0.0);
        for t in [0.1, 0.2, 0.3] {
            meter.observe(t);
        }
        assert_eq!(meter.total_units(), 1.5);
    }

    #[test]
    fn shorter_line_pads_over_the_previous_one() {
        let mut writer = StatusWriter::new(Vec::new());
        let long = StatusSnapshot {
            total_units: 100_000.0,
            current: 1000.0,
            mean: 1000.0,
            stddev: 10.0,
        };
        let short = StatusSnapshot {
            total_units: 1.0,
            current: 1.0,
            mean: 1.0,
            stddev: 0.0,
        };
        writer.write_status(&long).unwrap();
        writer.write_status(&short).unwrap();
        writer.finish().unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        let frames: Vec<&str> = out.trim_end_matches('\n').split('\r').skip(1).collect();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].chars().count(), frames[1].chars().count());
        assert!(frames[1].starts_with("Total: 1 | Current: 1.00"));
        assert!(out.ends_with(" \n"));
    }
}
