//! Trial duration histogram using HdrHistogram
//!
//! Wraps HdrHistogram to track how long individual trials take, so the
//! results table can show percentiles alongside the arithmetic mean.
//!
//! # Range
//!
//! - **Minimum**: 1 nanosecond
//! - **Maximum**: 7 days (values above are clamped)
//! - **Precision**: 3 significant digits (0.1%)
//!
//! # Example
//!
//! ```
//! use crackbench::stats::histogram::TrialHistogram;
//! use std::time::Duration;
//!
//! let mut hist = TrialHistogram::new();
//! hist.record(Duration::from_millis(10));
//! hist.record(Duration::from_millis(30));
//!
//! assert_eq!(hist.len(), 2);
//! assert!(hist.percentile(50.0).is_some());
//! ```

use hdrhistogram::Histogram;
use std::time::Duration;

/// Largest trackable trial duration in nanoseconds (7 days)
const MAX_TRACKABLE_NANOS: u64 = 7 * 24 * 3600 * 1_000_000_000;

/// Histogram of trial durations
#[derive(Debug, Clone)]
pub struct TrialHistogram {
    histogram: Histogram<u64>,
}

impl TrialHistogram {
    /// Create an empty histogram (1ns to 7 days, 3 significant digits)
    pub fn new() -> Self {
        let histogram = Histogram::new_with_bounds(1, MAX_TRACKABLE_NANOS, 3)
            .expect("Failed to create histogram with valid bounds");

        Self { histogram }
    }

    /// Record one trial duration, clamped to the trackable range
    #[inline]
    pub fn record(&mut self, elapsed: Duration) {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        let value = nanos.clamp(1, MAX_TRACKABLE_NANOS);
        let _ = self.histogram.record(value);
    }

    /// Duration at `percentile` (0.0 - 100.0), `None` when empty
    pub fn percentile(&self, percentile: f64) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.value_at_percentile(percentile)))
    }

    /// Standard deviation, `None` when empty
    pub fn stddev(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.stdev() as u64))
    }

    pub fn len(&self) -> u64 {
        self.histogram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.len() == 0
    }

}

impl Default for TrialHistogram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_histogram() {
        let hist = TrialHistogram::new();
        assert_eq!(hist.len(), 0);
        assert!(hist.is_empty());
        assert!(hist.percentile(50.0).is_none());
        assert!(hist.stddev().is_none());
    }

    #[test]
    fn test_percentile() {
        let mut hist = TrialHistogram::new();
        for i in 1..=100 {
            hist.record(Duration::from_millis(i));
        }

        let p50 = hist.percentile(50.0).unwrap();
        let p99 = hist.percentile(99.0).unwrap();

        assert!(p50.as_millis() >= 49 && p50.as_millis() <= 51);
        assert!(p99.as_millis() >= 98 && p99.as_millis() <= 100);
    }

    #[test]
    fn test_zero_duration_clamped_to_one_nanosecond() {
        let mut hist = TrialHistogram::new();
        hist.record(Duration::ZERO);
        assert_eq!(hist.percentile(100.0), Some(Duration::from_nanos(1)));
    }

    #[test]
    fn test_hour_long_trial() {
        let mut hist = TrialHistogram::new();
        hist.record(Duration::from_secs(3600));
        let max = hist.percentile(100.0).unwrap();
        assert!(max.as_secs() >= 3596 && max.as_secs() <= 3604);
    }

    #[test]
    fn test_stddev() {
        let mut hist = TrialHistogram::new();
        hist.record(Duration::from_micros(100));
        hist.record(Duration::from_micros(200));
        hist.record(Duration::from_micros(300));

        let stddev = hist.stddev().unwrap();
        // Population standard deviation is ~81.6us
        assert!(stddev.as_micros() >= 70 && stddev.as_micros() <= 90);
    }
}
