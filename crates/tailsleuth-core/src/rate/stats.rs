//! Running mean and sample standard deviation of rate samples.
//!
//! Only three accumulators are kept, so memory stays O(1) over an unbounded
//! run. The sum-of-squares form loses precision when the sum of squares
//! dwarfs the variance (very long runs, large rates); this is accepted.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningStats {
    sample_count: u64,
    sum_of_rates: f64,
    sum_of_squared_rates: f64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one rate sample in.
    pub fn add_sample(&mut self, rate: f64) {
        self.sample_count += 1;
        self.sum_of_rates += rate;
        self.sum_of_squared_rates += rate * rate;
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Zero before the first sample.
    pub fn mean(&self) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        self.sum_of_rates / self.sample_count as f64
    }

    /// Sample variance (n - 1 denominator). Zero for fewer than two samples.
    ///
    /// Cancellation can push the raw value slightly below zero; it is clamped.
    pub fn variance(&self) -> f64 {
        if self.sample_count < 2 {
            return 0.0;
        }
        let n = self.sample_count as f64;
        let raw =
            (self.sum_of_squared_rates - self.sum_of_rates * self.sum_of_rates / n) / (n - 1.0);
        raw.max(0.0)
    }

    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }
}
