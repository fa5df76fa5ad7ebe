//! JSON output formatting
//!
//! One report per benchmark run: the effective search configuration, a UTC
//! timestamp and one entry per measured length.

use crate::benchmark::{BenchmarkSeries, SeriesPoint};
use crate::config::SearchConfig;
use crate::util::time::format_duration;
use crate::Result;
use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Duration with both nanoseconds and human-readable format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonDuration {
    pub nanos: u64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        Self {
            nanos: u64::try_from(d.as_nanos()).unwrap_or(u64::MAX),
            human: format_duration(d),
        }
    }
}

/// Search settings the series was measured with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSearchConfig {
    pub alphabet_size: usize,
    pub lengths: Vec<usize>,
    pub repeats: u32,
    pub workers: usize,
    pub timeout: JsonDuration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl JsonSearchConfig {
    pub fn from_config(search: &SearchConfig) -> Self {
        Self {
            alphabet_size: search.alphabet.chars().count(),
            lengths: search.lengths.clone(),
            repeats: search.repeats,
            workers: search.workers,
            timeout: JsonDuration::from_duration(search.timeout()),
            seed: search.seed,
        }
    }
}

/// Measurements for one secret length
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSeriesPoint {
    pub length: usize,
    pub trials: u32,
    pub timeouts: u32,
    /// Plotted value: arithmetic mean in seconds
    pub mean_seconds: f64,
    pub mean: JsonDuration,
    pub min: Option<JsonDuration>,
    pub max: Option<JsonDuration>,
    pub p50: Option<JsonDuration>,
    pub p99: Option<JsonDuration>,
    pub stddev: Option<JsonDuration>,
    pub candidates_scanned: u128,
}

impl JsonSeriesPoint {
    pub fn from_point(point: &SeriesPoint) -> Self {
        let stats = &point.stats;
        Self {
            length: point.length,
            trials: stats.trials(),
            timeouts: stats.timeouts(),
            mean_seconds: point.mean_seconds(),
            mean: JsonDuration::from_duration(point.mean),
            min: stats.min().map(JsonDuration::from_duration),
            max: stats.max().map(JsonDuration::from_duration),
            p50: stats.percentile(50.0).map(JsonDuration::from_duration),
            p99: stats.percentile(99.0).map(JsonDuration::from_duration),
            stddev: stats.stddev().map(JsonDuration::from_duration),
            candidates_scanned: stats.candidates_scanned(),
        }
    }
}

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub tool: String,
    pub version: String,
    /// RFC 3339 UTC time the report was produced
    pub timestamp: String,
    pub config: JsonSearchConfig,
    pub series: Vec<JsonSeriesPoint>,
}

/// Build the report for a finished run
pub fn build_report(search: &SearchConfig, series: &BenchmarkSeries) -> JsonReport {
    JsonReport {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        config: JsonSearchConfig::from_config(search),
        series: series.points().iter().map(JsonSeriesPoint::from_point).collect(),
    }
}

/// Write the report to file as pretty-printed JSON
pub fn write_json_output(output_path: &Path, report: &JsonReport) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
