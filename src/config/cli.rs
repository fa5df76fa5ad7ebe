//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// crackbench - measure how long exhaustive search takes per secret length
#[derive(Parser, Debug)]
#[command(name = "crackbench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file (CLI flags take precedence)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    // === Search Options ===
    /// Comma-separated secret lengths to benchmark (e.g., 1,2,3,4)
    #[arg(short = 'l', long, value_delimiter = ',')]
    pub lengths: Option<Vec<usize>>,

    /// Worker threads per trial [default: 1000]
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Trials per length [default: 10]
    #[arg(short = 'r', long)]
    pub repeats: Option<u32>,

    /// Per-trial timeout (e.g., 500ms, 60s, 5m, 1h) [default: 1h]
    #[arg(short = 't', long)]
    pub timeout: Option<String>,

    /// Symbols a secret may contain [default: 94 printable ASCII symbols]
    #[arg(long)]
    pub alphabet: Option<String>,

    /// Seed for target generation (reproducible runs)
    #[arg(long, env = "CRACKBENCH_SEED")]
    pub seed: Option<u64>,

    // === Output Options ===
    /// Write the JSON report to this file
    #[arg(long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// Write the series as CSV to this file
    #[arg(long, value_name = "FILE")]
    pub csv_output: Option<PathBuf>,

    // === Runtime Options ===
    /// Validate configuration and show the search plan without running trials
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    ///
    /// Only catches flag-level mistakes; the merged configuration is checked
    /// by `validator::validate_config`.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.workers == Some(0) {
            anyhow::bail!("workers must be at least 1");
        }

        if self.repeats == Some(0) {
            anyhow::bail!("repeats must be at least 1");
        }

        if let Some(ref lengths) = self.lengths {
            if lengths.is_empty() {
                anyhow::bail!("lengths must list at least one length");
            }
        }

        if let Some(ref alphabet) = self.alphabet {
            if alphabet.is_empty() {
                anyhow::bail!("alphabet must not be empty");
            }
        }

        Ok(())
    }
}
