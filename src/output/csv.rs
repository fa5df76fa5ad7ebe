//! CSV output formatting
//!
//! One row per measured length, durations in seconds. Columns:
//! `length,trials,timeouts,mean_sec,min_sec,max_sec,p50_sec,p99_sec`.
//! Missing values are written as empty fields.

use crate::benchmark::{BenchmarkSeries, SeriesPoint};
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Header row
pub const CSV_HEADER: &str = "length,trials,timeouts,mean_sec,min_sec,max_sec,p50_sec,p99_sec";

/// Write the series as CSV to any writer
pub fn write_csv<W: Write>(writer: &mut W, series: &BenchmarkSeries) -> Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for point in series.points() {
        writeln!(writer, "{}", format_row(point))?;
    }
    Ok(())
}

/// Write the series as CSV to `output_path`
pub fn write_csv_output(output_path: &Path, series: &BenchmarkSeries) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create CSV output: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, series)?;
    writer.flush()?;
    Ok(())
}

fn format_row(point: &SeriesPoint) -> String {
    let stats = &point.stats;
    format!(
        "{},{},{},{:.9},{},{},{},{}",
        point.length,
        stats.trials(),
        stats.timeouts(),
        point.mean_seconds(),
        seconds(stats.min()),
        seconds(stats.max()),
        seconds(stats.percentile(50.0)),
        seconds(stats.percentile(99.0)),
    )
}

fn seconds(d: Option<Duration>) -> String {
    d.map(|d| format!("{:.9}", d.as_secs_f64())).unwrap_or_default()
}
