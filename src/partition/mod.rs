//! Search space partitioning
//!
//! Splits the candidate index space `[0, total)` into one contiguous range per
//! worker. Every range but the last has exactly `total / workers` indices; the
//! last range absorbs the truncation remainder. The ranges are disjoint and
//! their union is exactly `[0, total)`.
//!
//! The worker count is normalized with [`effective_workers`] before
//! partitioning: a configured count larger than the space is clamped to the
//! space size so no worker receives an empty range.
//!
//! # Example
//!
//! ```
//! use crackbench::partition::{partition, SearchRange};
//!
//! let ranges = partition(16, 4).unwrap();
//! assert_eq!(ranges, vec![
//!     SearchRange::new(0, 3),
//!     SearchRange::new(4, 7),
//!     SearchRange::new(8, 11),
//!     SearchRange::new(12, 15),
//! ]);
//! ```

use crate::error::{SearchError, SearchResult};
use std::fmt;

/// Contiguous slice of the candidate index space, `end` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    pub start: u128,
    pub end: u128,
}

impl SearchRange {
    pub fn new(start: u128, end: u128) -> Self {
        Self { start, end }
    }

    /// Number of indices in the range
    #[inline]
    pub fn len(&self) -> u128 {
        self.end - self.start + 1
    }

    /// Ranges are never empty; kept for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, index: u128) -> bool {
        self.start <= index && index <= self.end
    }

    /// Iterate the range in increasing order
    pub fn indices(&self) -> std::ops::RangeInclusive<u128> {
        self.start..=self.end
    }
}

impl fmt::Display for SearchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Clamp the configured worker count to the space size
///
/// # Arguments
///
/// * `configured` - Requested worker count, at least 1
/// * `total` - Number of candidates in the search space
///
/// # Returns
///
/// `min(configured, total)`, or `InvalidWorkerCount` for a zero count.
///
/// # Example
///
/// ```
/// use crackbench::partition::effective_workers;
///
/// assert_eq!(effective_workers(1000, 94).unwrap(), 94);
/// assert_eq!(effective_workers(8, 8836).unwrap(), 8);
/// ```
pub fn effective_workers(configured: usize, total: u128) -> SearchResult<usize> {
    if configured == 0 {
        return Err(SearchError::InvalidWorkerCount(configured));
    }
    if total < configured as u128 {
        // total < configured <= usize::MAX, so the cast is lossless
        Ok(total as usize)
    } else {
        Ok(configured)
    }
}

/// Split `[0, total)` into `workers` contiguous ranges
///
/// # Arguments
///
/// * `total` - Size of the candidate index space
/// * `workers` - Number of ranges to produce
///
/// # Returns
///
/// Ranges in index order. All but the last hold `total / workers` indices.
///
/// # Errors
///
/// Returns `InvalidPartition` unless `total >= workers >= 1`. Callers
/// normalize the worker count with [`effective_workers`] first.
pub fn partition(total: u128, workers: usize) -> SearchResult<Vec<SearchRange>> {
    if workers == 0 || total < workers as u128 {
        return Err(SearchError::InvalidPartition { total, workers });
    }

    let count = workers as u128;
    let nominal = total / count;

    let ranges = (0..count)
        .map(|i| {
            let start = i * nominal;
            let end = if i == count - 1 {
                total - 1
            } else {
                (i + 1) * nominal - 1
            };
            SearchRange::new(start, end)
        })
        .collect();

    Ok(ranges)
}
