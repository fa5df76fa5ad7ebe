//! Human-readable text output

use crate::benchmark::{BenchmarkSeries, LengthPlan};
use crate::util::time::{format_count, format_duration, format_optional};
use std::fmt::Write;

const RULE: &str = "═══════════════════════════════════════════════════════════════════════════";

/// Render the per-length results table
pub fn format_results(series: &BenchmarkSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "                         BENCHMARK RESULTS");
    let _ = writeln!(out, "{}", RULE);

    if series.is_empty() {
        let _ = writeln!(out, "No trials recorded");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>6}  {:>6}  {:>8}  {:>12}  {:>12}  {:>12}  {:>12}",
        "Length", "Trials", "Timeouts", "Mean", "Min", "Max", "p50"
    );
    for point in series.points() {
        let stats = &point.stats;
        let _ = writeln!(
            out,
            "{:>6}  {:>6}  {:>8}  {:>12}  {:>12}  {:>12}  {:>12}",
            point.length,
            stats.trials(),
            stats.timeouts(),
            format_duration(point.mean),
            format_optional(stats.min()),
            format_optional(stats.max()),
            format_optional(stats.percentile(50.0)),
        );
    }

    let timeouts: u32 = series.points().iter().map(|p| p.stats.timeouts()).sum();
    if timeouts > 0 {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} trial(s) hit the timeout; their full elapsed time is included in the mean",
            timeouts
        );
    }

    out
}

/// Print test results to console
pub fn print_results(series: &BenchmarkSeries) {
    print!("{}", format_results(series));
}

/// Render the dry-run search plan
pub fn format_plan(plan: &[LengthPlan]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Search plan:");
    for entry in plan {
        let _ = writeln!(
            out,
            "  Length {}: {} candidates across {} worker(s)",
            entry.length,
            format_count(entry.space_size),
            entry.workers
        );
    }
    out
}

pub fn print_plan(plan: &[LengthPlan]) {
    print!("{}", format_plan(plan));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LengthStats;
    use std::time::Duration;

    #[test]
    fn test_format_results_table() {
        let mut series = BenchmarkSeries::new();
        let mut stats = LengthStats::new(3);
        stats.record(Duration::from_millis(2), true, 5);
        stats.record(Duration::from_millis(4), false, 9);
        series.push(stats);

        let text = format_results(&series);
        assert!(text.contains("Length"));
        assert!(text.contains("3.00ms"));
        assert!(text.contains("1 trial(s) hit the timeout"));
    }

    #[test]
    fn test_format_results_empty() {
        assert!(format_results(&BenchmarkSeries::new()).contains("No trials recorded"));
    }

    #[test]
    fn test_format_plan() {
        let plan = vec![LengthPlan {
            length: 4,
            space_size: 78_074_896,
            workers: 1000,
        }];
        assert_eq!(
            format_plan(&plan),
            "Search plan:\n  Length 4: 78,074,896 candidates across 1000 worker(s)\n"
        );
    }
}
