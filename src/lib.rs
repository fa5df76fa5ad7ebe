//! crackbench - brute-force search benchmark
//!
//! Measures how long an exhaustive, multi-threaded search takes to recover a
//! randomly generated secret of a given length, and reports the mean time per
//! length as a series.
//!
//! # Architecture
//!
//! - **Enumerator**: bijection between indices `0..|A|^L` and candidate strings
//! - **Partitioner**: splits the index space into contiguous per-worker ranges
//! - **Worker**: scans one range, publishes a match without blocking
//! - **Coordinator**: spawns workers, waits for a match, exhaustion or the timeout
//! - **Benchmark**: runs repeated trials per length and collects the series

pub mod benchmark;
pub mod config;
pub mod coordinator;
pub mod enumerator;
pub mod error;
pub mod output;
pub mod partition;
pub mod stats;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use benchmark::{BenchmarkDriver, BenchmarkSeries};
pub use config::Config;
pub use coordinator::{SearchCoordinator, SearchOutcome};
pub use enumerator::Alphabet;
pub use error::{SearchError, SearchResult};

/// Result type used throughout crackbench
pub type Result<T> = anyhow::Result<T>;
