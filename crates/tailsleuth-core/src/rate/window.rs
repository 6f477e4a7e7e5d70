//! Windowed rate calculator.
//!
//! Keeps the most recent N event timestamps and derives an arrival rate from
//! the span they cover. `N` timestamps bound `N - 1` inter-arrival
//! intervals, so the rate is
//!
//! ```text
//! (count - 1) * unit_size / (newest - oldest)
//! ```
//!
//! Downstream consumers depend on this arrivals convention; do not switch it
//! to `count / span`.
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RateWindow {
    timestamps: VecDeque<f64>,
    capacity: usize,
    unit_size: f64,
}

impl RateWindow {
    /// `capacity` below 1 is treated as 1.
    pub fn new(capacity: usize, unit_size: f64) -> Self {
        let capacity = capacity.max(1);
        Self {
            timestamps: VecDeque::with_capacity(capacity),
            capacity,
            unit_size,
        }
    }

    /// Record one event, evicting the oldest timestamp when full.
    pub fn observe(&mut self, timestamp: f64) {
        if self.timestamps.len() == self.capacity {
            self.timestamps.pop_front();
        }
        self.timestamps.push_back(timestamp);
    }

    /// Units per second across the window.
    ///
    /// Zero with fewer than two timestamps or when they all coincide.
    pub fn current_rate(&self) -> f64 {
        let (Some(&oldest), Some(&newest)) = (self.timestamps.front(), self.timestamps.back())
        else {
            return 0.0;
        };
        let span = newest - oldest;
        if self.timestamps.len() < 2 || span <= 0.0 {
            return 0.0;
        }
        (self.timestamps.len() - 1) as f64 * self.unit_size / span
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
