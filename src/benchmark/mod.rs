//! Benchmark driver
//!
//! For each configured secret length the driver runs a fixed number of trials
//! one after another and records their durations. The result is a
//! [`BenchmarkSeries`]: one point per length, in configuration order, whose
//! headline value is the arithmetic mean trial duration.
//!
//! Trials that hit the timeout are logged and included in the mean with their
//! full elapsed time. Configuration faults abort before any trial runs; a
//! search that exhausts its space without a match aborts the benchmark, since
//! it means the enumerator or partitioner is broken.
//!
//! # Example
//!
//! ```
//! use crackbench::benchmark::BenchmarkDriver;
//! use crackbench::config::SearchConfig;
//!
//! let search = SearchConfig {
//!     alphabet: "abcd".to_string(),
//!     lengths: vec![1, 2],
//!     repeats: 3,
//!     workers: 4,
//!     seed: Some(1),
//!     ..SearchConfig::default()
//! };
//!
//! let mut driver = BenchmarkDriver::from_config(&search).unwrap();
//! let series = driver.run().unwrap();
//!
//! assert_eq!(series.lengths(), vec![1, 2]);
//! assert!(series.points().iter().all(|p| p.mean_seconds() > 0.0));
//! ```

pub mod trial;

use crate::config::SearchConfig;
use crate::coordinator::SearchCoordinator;
use crate::enumerator::secret::SecretGenerator;
use crate::enumerator::Alphabet;
use crate::partition::effective_workers;
use crate::stats::LengthStats;
use crate::Result;
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use trial::{TrialResult, TrialRunner};

/// Smallest mean reported in seconds; keeps every point plottable on a log axis
pub const MIN_REPORTED_SECONDS: f64 = 1e-9;

/// One point of the benchmark series
#[derive(Debug, Clone)]
pub struct SeriesPoint {
    pub length: usize,
    pub mean: Duration,
    pub stats: LengthStats,
}

impl SeriesPoint {
    /// Mean trial duration in seconds, floored at [`MIN_REPORTED_SECONDS`]
    pub fn mean_seconds(&self) -> f64 {
        self.mean.as_secs_f64().max(MIN_REPORTED_SECONDS)
    }
}

/// Ordered (length, mean duration) results of a benchmark run
#[derive(Debug, Clone, Default)]
pub struct BenchmarkSeries {
    points: Vec<SeriesPoint>,
}

impl BenchmarkSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the finished statistics for one length
    ///
    /// Lengths without any recorded trial are skipped.
    pub fn push(&mut self, stats: LengthStats) {
        if let Some(mean) = stats.mean() {
            self.points.push(SeriesPoint {
                length: stats.length(),
                mean,
                stats,
            });
        }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn lengths(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.length).collect()
    }

    /// The series as handed to a reporting layer: `(length, mean seconds)`
    pub fn mean_seconds(&self) -> Vec<(usize, f64)> {
        self.points.iter().map(|p| (p.length, p.mean_seconds())).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Search plan for one length, shown in dry-run mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthPlan {
    pub length: usize,
    pub space_size: u128,
    pub workers: usize,
}

/// Compute space size and effective worker count for every configured length
pub fn search_plan(search: &SearchConfig) -> Result<Vec<LengthPlan>> {
    let alphabet = Alphabet::new(&search.alphabet).context("Invalid alphabet")?;

    search
        .lengths
        .iter()
        .map(|&length| -> Result<LengthPlan> {
            let space_size = alphabet.space_size(length)?;
            let workers = effective_workers(search.workers, space_size)?;
            Ok(LengthPlan {
                length,
                space_size,
                workers,
            })
        })
        .collect()
}

/// Runs every configured length and collects the series
pub struct BenchmarkDriver {
    runner: TrialRunner,
    lengths: Vec<usize>,
    repeats: u32,
}

impl BenchmarkDriver {
    pub fn new(runner: TrialRunner, lengths: Vec<usize>, repeats: u32) -> Self {
        Self {
            runner,
            lengths,
            repeats,
        }
    }

    /// Build a driver from a validated search configuration
    pub fn from_config(search: &SearchConfig) -> Result<Self> {
        let alphabet = Arc::new(Alphabet::new(&search.alphabet).context("Invalid alphabet")?);
        let coordinator = SearchCoordinator::new(alphabet, search.workers, search.timeout());
        let generator = SecretGenerator::from_seed_option(search.seed);

        Ok(Self::new(
            TrialRunner::new(coordinator, generator),
            search.lengths.clone(),
            search.repeats,
        ))
    }

    /// Run all trials and return the series
    pub fn run(&mut self) -> Result<BenchmarkSeries> {
        self.run_with(|_| {})
    }

    /// Run all trials, calling `on_trial` after each one
    ///
    /// # Arguments
    ///
    /// * `on_trial` - Called with every finished trial, in execution order
    ///
    /// # Returns
    ///
    /// One series point per configured length, in configuration order.
    /// A trial error (invalid length, exhausted space, failed dispatch)
    /// aborts the run with the trial and length attached as context.
    pub fn run_with<F>(&mut self, mut on_trial: F) -> Result<BenchmarkSeries>
    where
        F: FnMut(&TrialResult),
    {
        let mut series = BenchmarkSeries::new();

        for &length in &self.lengths {
            let mut stats = LengthStats::new(length);

            for attempt in 1..=self.repeats {
                info!(length, attempt, repeats = self.repeats, "Attempting to crack secret");
                let result = self
                    .runner
                    .run(length)
                    .with_context(|| format!("Trial {} for length {} failed", attempt, length))?;

                stats.record(result.elapsed, result.is_found(), result.candidates_scanned);
                on_trial(&result);
            }

            if let Some(mean) = stats.mean() {
                info!(
                    length,
                    mean_secs = mean.as_secs_f64(),
                    timeouts = stats.timeouts(),
                    "Average time to crack secret"
                );
            }
            series.push(stats);
        }

        Ok(series)
    }
}
