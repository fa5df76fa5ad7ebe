//! Trial statistics
//!
//! Accumulates the trials run for one secret length. The mean is the exact
//! arithmetic mean of the recorded durations (sum divided by trial count);
//! the histogram is only used for percentiles.
//!
//! # Example
//!
//! ```
//! use crackbench::stats::LengthStats;
//! use std::time::Duration;
//!
//! let mut stats = LengthStats::new(3);
//! stats.record(Duration::from_millis(10), true, 500);
//! stats.record(Duration::from_millis(30), true, 900);
//!
//! assert_eq!(stats.trials(), 2);
//! assert_eq!(stats.mean(), Some(Duration::from_millis(20)));
//! ```

pub mod histogram;

use histogram::TrialHistogram;
use std::time::Duration;

/// Running statistics for all trials of one secret length
#[derive(Debug, Clone)]
pub struct LengthStats {
    length: usize,
    trials: u32,
    timeouts: u32,
    total: Duration,
    min: Option<Duration>,
    max: Option<Duration>,
    candidates_scanned: u128,
    histogram: TrialHistogram,
}

impl LengthStats {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            trials: 0,
            timeouts: 0,
            total: Duration::ZERO,
            min: None,
            max: None,
            candidates_scanned: 0,
            histogram: TrialHistogram::new(),
        }
    }

    /// Record one trial
    ///
    /// # Arguments
    ///
    /// * `elapsed` - Wall-clock duration of the trial
    /// * `found` - False for a trial that hit the timeout; its elapsed time
    ///   still counts toward the mean
    /// * `candidates_scanned` - Candidates compared across all workers
    pub fn record(&mut self, elapsed: Duration, found: bool, candidates_scanned: u128) {
        self.trials += 1;
        if !found {
            self.timeouts += 1;
        }
        self.total += elapsed;
        self.min = Some(self.min.map_or(elapsed, |m| m.min(elapsed)));
        self.max = Some(self.max.map_or(elapsed, |m| m.max(elapsed)));
        self.candidates_scanned += candidates_scanned;
        self.histogram.record(elapsed);
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Trials that ended on the timeout
    pub fn timeouts(&self) -> u32 {
        self.timeouts
    }

    /// Sum of all trial durations
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Arithmetic mean trial duration, `None` before the first trial
    pub fn mean(&self) -> Option<Duration> {
        if self.trials == 0 {
            return None;
        }
        Some(self.total / self.trials)
    }

    pub fn min(&self) -> Option<Duration> {
        self.min
    }

    pub fn max(&self) -> Option<Duration> {
        self.max
    }

    pub fn percentile(&self, percentile: f64) -> Option<Duration> {
        self.histogram.percentile(percentile)
    }

    pub fn stddev(&self) -> Option<Duration> {
        self.histogram.stddev()
    }

    /// Candidates compared across all trials
    pub fn candidates_scanned(&self) -> u128 {
        self.candidates_scanned
    }

    pub fn histogram(&self) -> &TrialHistogram {
        &self.histogram
    }
}
