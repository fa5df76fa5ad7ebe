//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::enumerator::DEFAULT_ALPHABET;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Complete benchmark configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// What to search and how hard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Symbols a secret may contain, in enumeration order
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    /// Secret lengths to benchmark, in report order
    #[serde(default = "default_lengths")]
    pub lengths: Vec<usize>,
    /// Trials per length
    #[serde(default = "default_repeats")]
    pub repeats: u32,
    /// Worker threads per trial (clamped to the search space size)
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Per-trial timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Seed for target generation (entropy if unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

fn default_lengths() -> Vec<usize> {
    vec![1, 2, 3, 4, 5, 6]
}

fn default_repeats() -> u32 {
    10
}

fn default_workers() -> usize {
    1000
}

fn default_timeout_ms() -> u64 {
    3_600_000
}

impl SearchConfig {
    /// Per-trial timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alphabet: default_alphabet(),
            lengths: default_lengths(),
            repeats: default_repeats(),
            workers: default_workers(),
            timeout_ms: default_timeout_ms(),
            seed: None,
        }
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lengths: Vec<String> = self.lengths.iter().map(|l| l.to_string()).collect();
        write!(
            f,
            "lengths [{}], {} repeats, {} workers, timeout {}",
            lengths.join(", "),
            self.repeats,
            self.workers,
            crate::util::time::format_duration(self.timeout())
        )
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// JSON report file path
    pub json_output: Option<PathBuf>,
    /// CSV series file path
    pub csv_output: Option<PathBuf>,
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    /// Validate and print the configuration without running trials
    #[serde(default)]
    pub dry_run: bool,
    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}
