//! crackbench CLI entry point

use anyhow::{Context, Result};
use crackbench::benchmark::{search_plan, BenchmarkDriver};
use crackbench::config::{cli::Cli, toml, validator, Config};
use crackbench::output::{csv, json, text};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    println!("crackbench v{}", env!("CARGO_PKG_VERSION"));
    println!("Brute-force search benchmark");
    println!();

    let cli = Cli::parse_args();
    cli.validate()?;

    let config = toml::load_config(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;

    init_logging(config.runtime.debug);

    print_configuration(&config);

    if config.runtime.dry_run {
        let plan = search_plan(&config.search)?;
        println!();
        text::print_plan(&plan);
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    println!();
    println!("Starting benchmark...");
    println!();

    let mut driver = BenchmarkDriver::from_config(&config.search)?;
    let series = driver.run()?;

    println!();
    text::print_results(&series);

    if let Some(ref path) = config.output.json_output {
        let report = json::build_report(&config.search, &series);
        json::write_json_output(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    if let Some(ref path) = config.output.csv_output {
        csv::write_csv_output(path, &series)?;
        println!("CSV series written to {}", path.display());
    }

    Ok(())
}

/// Install the tracing subscriber; `RUST_LOG` overrides the level
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print configuration summary
fn print_configuration(config: &Config) {
    let search = &config.search;

    println!("Configuration:");
    println!("  Search:");
    println!("    Alphabet: {} symbols", search.alphabet.chars().count());
    println!("    {}", search);
    match search.seed {
        Some(seed) => println!("    Seed: {}", seed),
        None => println!("    Seed: entropy"),
    }

    if config.output.json_output.is_some() || config.output.csv_output.is_some() {
        println!("  Output:");
        if let Some(ref path) = config.output.json_output {
            println!("    JSON: {}", path.display());
        }
        if let Some(ref path) = config.output.csv_output {
            println!("    CSV: {}", path.display());
        }
    }
}
