//! Search engine error types
//!
//! Configuration faults are detected before any worker is dispatched. The
//! runtime variants cover a defect in the enumerator or partitioner
//! (`SpaceExhausted`), a thread the OS refused to start (`DispatchFailed`) and
//! a crashed worker (`WorkerPanicked`). A timeout is never an error.

use thiserror::Error;

/// Result type for search engine operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors raised by the enumerator, partitioner and coordinator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("alphabet contains duplicate symbol {0:?}")]
    DuplicateSymbol(char),

    #[error("secret length must be at least 1, got {0}")]
    InvalidLength(usize),

    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    #[error("search space {base}^{length} does not fit in 128 bits")]
    SpaceTooLarge { base: usize, length: usize },

    #[error("cannot split {total} candidates across {workers} workers")]
    InvalidPartition { total: u128, workers: usize },

    #[error("all {workers} workers exhausted {total} candidates without matching the target")]
    SpaceExhausted { total: u128, workers: usize },

    #[error("started {started} of {workers} worker threads before spawning failed: {reason}")]
    DispatchFailed {
        started: usize,
        workers: usize,
        reason: String,
    },

    #[error("{0} worker thread(s) panicked")]
    WorkerPanicked(usize),
}
