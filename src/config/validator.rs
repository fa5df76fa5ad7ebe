//! Configuration validation
//!
//! Everything that would otherwise surface mid-search is rejected here, before
//! any trial is dispatched. A worker count larger than a length's search space
//! is not an error: the coordinator clamps it to the space size.

use super::*;
use crate::enumerator::Alphabet;
use anyhow::{Context, Result};

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_search(&config.search)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate search configuration
pub fn validate_search(search: &SearchConfig) -> Result<()> {
    let alphabet = Alphabet::new(&search.alphabet).context("Invalid alphabet")?;

    if search.lengths.is_empty() {
        anyhow::bail!("At least one secret length must be specified");
    }

    for &length in &search.lengths {
        alphabet
            .space_size(length)
            .with_context(|| format!("Invalid secret length {}", length))?;
    }

    if search.workers == 0 {
        anyhow::bail!("workers must be at least 1, got 0");
    }

    if search.repeats == 0 {
        anyhow::bail!("repeats must be at least 1, got 0");
    }

    Ok(())
}

/// Validate output configuration
fn validate_output(output: &OutputConfig) -> Result<()> {
    if let (Some(json), Some(csv)) = (&output.json_output, &output.csv_output) {
        if json == csv {
            anyhow::bail!(
                "json_output and csv_output must be different files, both are {}",
                json.display()
            );
        }
    }

    Ok(())
}
