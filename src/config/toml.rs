//! TOML configuration file parsing
//!
//! ```toml
//! [search]
//! alphabet = "abcdefghijklmnopqrstuvwxyz"
//! lengths = [1, 2, 3, 4]
//! repeats = 5
//! workers = 64
//! timeout_ms = 60000
//! seed = 42
//!
//! [output]
//! json_output = "results.json"
//! csv_output = "results.csv"
//!
//! [runtime]
//! debug = true
//! ```
//!
//! Every table and key is optional; missing keys take the built-in defaults.

use super::Config;
use crate::config::cli::Cli;
use crate::config::cli_convert;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Load the configuration for this invocation
///
/// Reads `--config` if given, then overlays the remaining CLI flags.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    cli_convert::apply_cli(cli, base)
}
