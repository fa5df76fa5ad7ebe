//! Single trial execution
//!
//! A trial generates one random target of the requested length, runs the
//! coordinator against it and reports the elapsed wall-clock time. Trials are
//! strictly sequential: the coordinator joins every worker before returning,
//! so at most one trial's worth of threads exists at any time.

use crate::coordinator::{SearchCoordinator, SearchOutcome};
use crate::enumerator::secret::SecretGenerator;
use crate::error::SearchResult;
use std::time::Duration;
use tracing::{info, warn};

/// Outcome of one trial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialResult {
    pub length: usize,
    pub target: String,
    /// Recovered secret, `None` on timeout
    pub found: Option<String>,
    pub elapsed: Duration,
    pub workers: usize,
    pub candidates_scanned: u128,
}

impl TrialResult {
    fn from_outcome(length: usize, target: String, outcome: SearchOutcome) -> Self {
        Self {
            length,
            target,
            found: outcome.found,
            elapsed: outcome.elapsed,
            workers: outcome.workers,
            candidates_scanned: outcome.candidates_scanned,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }
}

/// Runs trials with a shared coordinator and target generator
pub struct TrialRunner {
    coordinator: SearchCoordinator,
    generator: SecretGenerator,
}

impl TrialRunner {
    pub fn new(coordinator: SearchCoordinator, generator: SecretGenerator) -> Self {
        Self {
            coordinator,
            generator,
        }
    }

    /// Run one trial against a freshly generated target
    pub fn run(&mut self, length: usize) -> SearchResult<TrialResult> {
        let target = self.generator.generate(self.coordinator.alphabet(), length);
        info!(length, target = %target, "Generated target secret");
        self.run_against(target, length)
    }

    /// Run one trial against a caller-chosen target
    pub fn run_against(&self, target: String, length: usize) -> SearchResult<TrialResult> {
        let outcome = self.coordinator.run(&target, length)?;

        match outcome.found {
            Some(ref found) => info!(
                length,
                found = %found,
                elapsed_secs = outcome.elapsed.as_secs_f64(),
                "Secret recovered"
            ),
            None => warn!(
                length,
                target = %target,
                timeout_secs = self.coordinator.timeout().as_secs_f64(),
                "Secret not found before timeout"
            ),
        }

        Ok(TrialResult::from_outcome(length, target, outcome))
    }
}
