//! Search coordinator
//!
//! Runs one exhaustive search: partitions the candidate space, launches one
//! worker thread per range, and waits for the first of
//!
//! - a worker publishing the match on the result conduit,
//! - the global timeout elapsing,
//! - every worker exhausting its range (the conduit disconnects with nothing
//!   buffered; this is a defect in the enumerator or partitioner).
//!
//! Whichever branch fires, teardown runs exactly once: the cancellation flag
//! is set and every worker thread is joined before [`SearchCoordinator::run`]
//! returns, so no worker outlives its trial.
//!
//! # Example
//!
//! ```
//! use crackbench::coordinator::SearchCoordinator;
//! use crackbench::enumerator::Alphabet;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let alphabet = Arc::new(Alphabet::new("ABCD").unwrap());
//! let coordinator = SearchCoordinator::new(alphabet, 4, Duration::from_secs(60));
//!
//! let outcome = coordinator.run("CC", 2).unwrap();
//! assert_eq!(outcome.found.as_deref(), Some("CC"));
//! assert_eq!(outcome.found_index, Some(10));
//! assert!(outcome.elapsed < Duration::from_secs(60));
//! ```

use crate::enumerator::Alphabet;
use crate::error::{SearchError, SearchResult};
use crate::partition::{effective_workers, partition};
use crate::worker::{Found, ScanReport, Worker};
use crossbeam::channel::{bounded, RecvTimeoutError};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// One worker's scan, boxed for handing to a thread spawner
type WorkerJob = Box<dyn FnOnce() -> ScanReport + Send + 'static>;

/// Spawn a named worker thread, surfacing OS refusal as an error
fn spawn_named(name: String, job: WorkerJob) -> io::Result<JoinHandle<ScanReport>> {
    thread::Builder::new().name(name).spawn(job)
}

/// Terminal state of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The recovered secret, `None` if the timeout fired first
    pub found: Option<String>,
    /// Index of the recovered secret
    pub found_index: Option<u128>,
    /// Wall-clock time from init to the end of teardown
    pub elapsed: Duration,
    /// Workers actually launched (after clamping to the space size)
    pub workers: usize,
    /// Candidates compared across all workers
    pub candidates_scanned: u128,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }
}

/// Which branch of the await step fired
enum Wakeup {
    Found(Found),
    TimedOut,
    Exhausted,
}

/// Coordinates a pool of workers over one candidate space
pub struct SearchCoordinator {
    alphabet: Arc<Alphabet>,
    workers: usize,
    timeout: Duration,
}

impl SearchCoordinator {
    /// Create a coordinator launching up to `workers` threads per search
    pub fn new(alphabet: Arc<Alphabet>, workers: usize, timeout: Duration) -> Self {
        Self {
            alphabet,
            workers,
            timeout,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Search for `target` among all candidates of `length` symbols
    ///
    /// # Errors
    ///
    /// Configuration faults (`InvalidLength`, `InvalidWorkerCount`,
    /// `SpaceTooLarge`) are returned before any thread is spawned.
    /// `SpaceExhausted` is returned if every worker finished without a match,
    /// `WorkerPanicked` if a worker thread panicked, and `DispatchFailed` if
    /// the OS refused a worker thread (already started workers are cancelled
    /// and joined first). A timeout is not an error: it yields an outcome with
    /// `found == None`.
    pub fn run(&self, target: &str, length: usize) -> SearchResult<SearchOutcome> {
        self.run_with_spawner(target, length, spawn_named)
    }

    /// [`run`](Self::run) with a caller-supplied thread spawner
    fn run_with_spawner<S>(&self, target: &str, length: usize, mut spawn: S) -> SearchResult<SearchOutcome>
    where
        S: FnMut(String, WorkerJob) -> io::Result<JoinHandle<ScanReport>>,
    {
        // Init
        let total = self.alphabet.space_size(length)?;
        let workers = effective_workers(self.workers, total)?;
        if workers < self.workers {
            debug!(
                configured = self.workers,
                effective = workers,
                total = %total,
                "Clamped worker count to search space size"
            );
        }
        let ranges = partition(total, workers)?;

        let cancel = Arc::new(AtomicBool::new(false));
        let (tx, rx) = bounded::<Found>(1);
        let target: Arc<str> = Arc::from(target);
        let start = Instant::now();

        // Dispatch
        let mut handles: Vec<JoinHandle<ScanReport>> = Vec::with_capacity(workers);
        for (id, range) in ranges.into_iter().enumerate() {
            let worker = Worker::new(id, range, target.clone(), length, self.alphabet.clone());
            let worker_cancel = cancel.clone();
            let worker_tx = tx.clone();
            let job: WorkerJob = Box::new(move || worker.scan(&worker_cancel, &worker_tx));

            match spawn(format!("search-worker-{}", id), job) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    cancel.store(true, Ordering::Relaxed);
                    let started = handles.len();
                    for handle in handles {
                        let _ = handle.join();
                    }
                    warn!(started, workers, error = %e, "Failed to start worker thread");
                    return Err(SearchError::DispatchFailed {
                        started,
                        workers,
                        reason: e.to_string(),
                    });
                }
            }
        }

        // Only workers hold senders now; the channel disconnects when all exit
        drop(tx);

        // Await
        let wakeup = match rx.recv_timeout(self.timeout) {
            Ok(found) => Wakeup::Found(found),
            Err(RecvTimeoutError::Timeout) => Wakeup::TimedOut,
            Err(RecvTimeoutError::Disconnected) => Wakeup::Exhausted,
        };

        // Teardown
        cancel.store(true, Ordering::Relaxed);
        let mut candidates_scanned = 0u128;
        let mut panicked = 0usize;
        for handle in handles {
            match handle.join() {
                Ok(report) => candidates_scanned += report.scanned,
                Err(_) => panicked += 1,
            }
        }
        let elapsed = start.elapsed();

        if panicked > 0 {
            return Err(SearchError::WorkerPanicked(panicked));
        }

        // Terminal
        match wakeup {
            Wakeup::Found(found) => {
                debug!(
                    worker = found.worker_id,
                    index = %found.index,
                    "Worker reported match"
                );
                Ok(SearchOutcome {
                    found: Some(found.candidate),
                    found_index: Some(found.index),
                    elapsed,
                    workers,
                    candidates_scanned,
                })
            }
            Wakeup::TimedOut => Ok(SearchOutcome {
                found: None,
                found_index: None,
                elapsed,
                workers,
                candidates_scanned,
            }),
            Wakeup::Exhausted => Err(SearchError::SpaceExhausted { total, workers }),
        }
    }
}
