//! CLI to Config conversion utilities

use crate::config::cli::Cli;
use crate::config::{Config, OutputConfig, RuntimeConfig, SearchConfig};
use anyhow::{Context, Result};

/// Parse a duration string (e.g., "500ms", "60s", "5m", "1h") to milliseconds
///
/// A bare number is taken as seconds.
pub fn parse_duration_ms(s: &str) -> Result<u64> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if s.ends_with("ms") {
        (s.trim_end_matches("ms"), 1u64)
    } else if s.ends_with("sec") || s.ends_with('s') {
        (s.trim_end_matches("sec").trim_end_matches('s'), 1000)
    } else if s.ends_with("min") || s.ends_with('m') {
        (s.trim_end_matches("min").trim_end_matches('m'), 60 * 1000)
    } else if s.ends_with("hr") || s.ends_with('h') {
        (s.trim_end_matches("hr").trim_end_matches('h'), 3600 * 1000)
    } else {
        (s.as_str(), 1000)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid duration format: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Duration out of range: {}", s))
}

/// Overlay CLI arguments onto `config` (CLI takes precedence)
pub fn apply_cli(cli: &Cli, mut config: Config) -> Result<Config> {
    let search: &mut SearchConfig = &mut config.search;

    if let Some(ref lengths) = cli.lengths {
        search.lengths = lengths.clone();
    }
    if let Some(workers) = cli.workers {
        search.workers = workers;
    }
    if let Some(repeats) = cli.repeats {
        search.repeats = repeats;
    }
    if let Some(ref timeout) = cli.timeout {
        search.timeout_ms = parse_duration_ms(timeout).context("Invalid timeout")?;
    }
    if let Some(ref alphabet) = cli.alphabet {
        search.alphabet = alphabet.clone();
    }
    if cli.seed.is_some() {
        search.seed = cli.seed;
    }

    let output: &mut OutputConfig = &mut config.output;
    if cli.json_output.is_some() {
        output.json_output = cli.json_output.clone();
    }
    if cli.csv_output.is_some() {
        output.csv_output = cli.csv_output.clone();
    }

    let runtime: &mut RuntimeConfig = &mut config.runtime;
    runtime.dry_run |= cli.dry_run;
    runtime.debug |= cli.debug;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_duration_ms() {
        assert_eq!(parse_duration_ms("500ms").unwrap(), 500);
        assert_eq!(parse_duration_ms("60s").unwrap(), 60_000);
        assert_eq!(parse_duration_ms("10sec").unwrap(), 10_000);
        assert_eq!(parse_duration_ms("5m").unwrap(), 300_000);
        assert_eq!(parse_duration_ms("2min").unwrap(), 120_000);
        assert_eq!(parse_duration_ms("1h").unwrap(), 3_600_000);
        assert_eq!(parse_duration_ms("1hr").unwrap(), 3_600_000);
        assert_eq!(parse_duration_ms("42").unwrap(), 42_000);
        assert_eq!(parse_duration_ms(" 0s ").unwrap(), 0);
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration_ms("fast").is_err());
        assert!(parse_duration_ms("").is_err());
        assert!(parse_duration_ms("-5s").is_err());
    }

    #[test]
    fn test_apply_cli_without_flags_keeps_defaults() {
        let cli = Cli::try_parse_from(["crackbench"]).unwrap();
        let config = apply_cli(&cli, Config::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_apply_cli_overrides() {
        let cli = Cli::try_parse_from([
            "crackbench",
            "--lengths",
            "2,4",
            "--timeout",
            "250ms",
            "--json-output",
            "report.json",
            "--dry-run",
        ])
        .unwrap();

        let mut base = Config::default();
        base.search.workers = 12;
        let config = apply_cli(&cli, base).unwrap();

        assert_eq!(config.search.lengths, vec![2, 4]);
        assert_eq!(config.search.timeout_ms, 250);
        // Not given on the command line, keeps the base value
        assert_eq!(config.search.workers, 12);
        assert_eq!(
            config.output.json_output.as_deref(),
            Some(std::path::Path::new("report.json"))
        );
        assert!(config.runtime.dry_run);
    }

    #[test]
    fn test_apply_cli_bad_timeout() {
        let cli = Cli::try_parse_from(["crackbench", "--timeout", "soon"]).unwrap();
        assert!(apply_cli(&cli, Config::default()).is_err());
    }
}
