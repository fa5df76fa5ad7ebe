//! Search worker
//!
//! A worker scans one contiguous [`SearchRange`] of candidate indices: it
//! decodes each index into a candidate string and compares it to the target.
//! Each worker runs on its own thread and shares only read-only state (target,
//! alphabet) plus two coordination handles owned by the coordinator:
//!
//! - **Cancellation flag**: checked before every candidate. Once set, the
//!   worker returns without finishing its range. Cancellation is cooperative;
//!   its latency is one decode-and-compare, O(length).
//! - **Result conduit**: a capacity-1 channel. A matching worker publishes with
//!   a non-blocking `try_send`; if the slot is already full or the coordinator
//!   has gone away, the publish is dropped. Publishing never blocks.
//!
//! # Example
//!
//! ```
//! use crackbench::enumerator::Alphabet;
//! use crackbench::partition::SearchRange;
//! use crackbench::worker::{ScanOutcome, Worker};
//! use crossbeam::channel::bounded;
//! use std::sync::atomic::AtomicBool;
//! use std::sync::Arc;
//!
//! let alphabet = Arc::new(Alphabet::new("ABCD").unwrap());
//! let worker = Worker::new(0, SearchRange::new(8, 11), Arc::from("CC"), 2, alphabet);
//!
//! let cancel = AtomicBool::new(false);
//! let (tx, rx) = bounded(1);
//! let report = worker.scan(&cancel, &tx);
//!
//! assert_eq!(report.outcome, ScanOutcome::Matched(10));
//! assert_eq!(rx.try_recv().unwrap().candidate, "CC");
//! ```

use crate::enumerator::Alphabet;
use crate::partition::SearchRange;
use crossbeam::channel::Sender;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Match published by the winning worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub worker_id: usize,
    pub index: u128,
    pub candidate: String,
}

/// How a scan ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Target found at this index (and a publish was attempted)
    Matched(u128),
    /// Whole range compared, no match
    Exhausted,
    /// Cancellation observed before the range was finished
    Cancelled,
}

/// Result of one worker's scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub worker_id: usize,
    pub outcome: ScanOutcome,
    /// Candidates decoded and compared
    pub scanned: u128,
}

/// Brute-force worker over one index range
pub struct Worker {
    id: usize,
    range: SearchRange,
    target: Arc<str>,
    length: usize,
    alphabet: Arc<Alphabet>,
}

impl Worker {
    /// Create a worker for `range`, searching for `target` among candidates of
    /// `length` symbols
    pub fn new(
        id: usize,
        range: SearchRange,
        target: Arc<str>,
        length: usize,
        alphabet: Arc<Alphabet>,
    ) -> Self {
        Self {
            id,
            range,
            target,
            length,
            alphabet,
        }
    }

    /// Scan the assigned range until a match, exhaustion or cancellation
    pub fn scan(&self, cancel: &AtomicBool, conduit: &Sender<Found>) -> ScanReport {
        self.scan_with(cancel, conduit, |_| {})
    }

    /// Scan like [`scan`](Self::scan), calling `on_candidate` with each index
    /// after it is decoded and before it is compared
    ///
    /// # Arguments
    ///
    /// * `cancel` - Checked before every candidate
    /// * `conduit` - Receives the match, if any, through a non-blocking publish
    /// * `on_candidate` - Per-candidate hook (progress counters, instrumentation)
    ///
    /// # Returns
    ///
    /// A report whose `scanned` count equals the number of hook calls.
    pub fn scan_with<F>(&self, cancel: &AtomicBool, conduit: &Sender<Found>, mut on_candidate: F) -> ScanReport
    where
        F: FnMut(u128),
    {
        let mut candidate = String::with_capacity(self.length * 4);
        let mut scanned = 0u128;

        for index in self.range.indices() {
            if cancel.load(Ordering::Relaxed) {
                return self.report(ScanOutcome::Cancelled, scanned);
            }

            self.alphabet.decode_into(index, self.length, &mut candidate);
            scanned += 1;
            on_candidate(index);

            if *candidate == *self.target {
                // Full slot or dropped receiver: another publish already won
                let _ = conduit.try_send(Found {
                    worker_id: self.id,
                    index,
                    candidate,
                });
                return self.report(ScanOutcome::Matched(index), scanned);
            }
        }

        self.report(ScanOutcome::Exhausted, scanned)
    }

    fn report(&self, outcome: ScanOutcome, scanned: u128) -> ScanReport {
        ScanReport {
            worker_id: self.id,
            outcome,
            scanned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use crossbeam::channel::bounded;
    use std::sync::atomic::AtomicU64;
    use std::thread;
    use std::time::{Duration, Instant};

    fn abcd() -> Arc<Alphabet> {
        Arc::new(Alphabet::new("ABCD").unwrap())
    }

    #[test]
    fn test_scan_finds_target_in_range() {
        let worker = Worker::new(2, SearchRange::new(8, 11), Arc::from("CC"), 2, abcd());
        let cancel = AtomicBool::new(false);
        let (tx, rx) = bounded(1);

        let report = worker.scan(&cancel, &tx);

        assert_eq!(report.worker_id, 2);
        assert_eq!(report.outcome, ScanOutcome::Matched(10));
        assert_eq!(report.scanned, 3);
        assert_eq!(
            rx.try_recv().unwrap(),
            Found {
                worker_id: 2,
                index: 10,
                candidate: "CC".to_string(),
            }
        );
    }

    #[test]
    fn test_scan_exhausts_without_match() {
        let worker = Worker::new(0, SearchRange::new(0, 3), Arc::from("CC"), 2, abcd());
        let cancel = AtomicBool::new(false);
        let (tx, rx) = bounded(1);

        let report = worker.scan(&cancel, &tx);

        assert_eq!(report.outcome, ScanOutcome::Exhausted);
        assert_eq!(report.scanned, 4);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_exactly_one_match_across_full_space() {
        let alphabet = abcd();
        let target: Arc<str> = Arc::from(alphabet.decode(37, 3).as_str());
        let cancel = AtomicBool::new(false);
        let (tx, rx) = bounded(1);

        let ranges = partition(alphabet.space_size(3).unwrap(), 5).unwrap();
        let matches: Vec<u128> = ranges
            .iter()
            .enumerate()
            .filter_map(|(id, range)| {
                let worker = Worker::new(id, *range, target.clone(), 3, alphabet.clone());
                match worker.scan(&cancel, &tx).outcome {
                    ScanOutcome::Matched(index) => Some(index),
                    _ => None,
                }
            })
            .collect();

        assert_eq!(matches, vec![37]);
        assert_eq!(rx.try_recv().unwrap().index, 37);
    }

    #[test]
    fn test_preset_cancel_stops_before_first_candidate() {
        let worker = Worker::new(0, SearchRange::new(0, 15), Arc::from("DD"), 2, abcd());
        let cancel = AtomicBool::new(true);
        let (tx, _rx) = bounded(1);

        let report = worker.scan(&cancel, &tx);

        assert_eq!(report.outcome, ScanOutcome::Cancelled);
        assert_eq!(report.scanned, 0);
    }

    #[test]
    fn test_cancel_stops_after_current_candidate() {
        let worker = Worker::new(0, SearchRange::new(0, 4095), Arc::from("??????"), 6, abcd());
        let cancel = AtomicBool::new(false);
        let (tx, _rx) = bounded(1);

        // Cancel from inside the loop after the 100th candidate
        let report = worker.scan_with(&cancel, &tx, |index| {
            if index == 99 {
                cancel.store(true, Ordering::Relaxed);
            }
        });

        assert_eq!(report.outcome, ScanOutcome::Cancelled);
        assert_eq!(report.scanned, 100);
    }

    #[test]
    fn test_cancel_mid_scan_bounded_iterations() {
        // The target contains a foreign symbol, so the scan can only end by
        // exhaustion (which would take far longer than this test) or cancellation
        let range = SearchRange::new(0, u64::MAX as u128);
        let worker = Worker::new(0, range, Arc::from("??????????????????"), 18, abcd());
        let cancel = Arc::new(AtomicBool::new(false));
        let progress = Arc::new(AtomicU64::new(0));
        let (tx, _rx) = bounded(1);

        let handle = {
            let cancel = cancel.clone();
            let progress = progress.clone();
            thread::spawn(move || {
                worker.scan_with(&cancel, &tx, |_| {
                    progress.fetch_add(1, Ordering::SeqCst);
                })
            })
        };

        while progress.load(Ordering::SeqCst) < 1_000 {
            thread::yield_now();
        }
        let cancelled_at = Instant::now();
        cancel.store(true, Ordering::SeqCst);
        let seen_at_cancel = progress.load(Ordering::SeqCst) as u128;
        let report = handle.join().unwrap();

        assert_eq!(report.outcome, ScanOutcome::Cancelled);
        assert_eq!(report.scanned, progress.load(Ordering::SeqCst) as u128);
        assert!(report.scanned >= seen_at_cancel);
        // Only candidates already past the flag check may still be counted
        assert!(
            report.scanned - seen_at_cancel <= 1_000,
            "{} candidates scanned after cancellation",
            report.scanned - seen_at_cancel
        );
        assert!(cancelled_at.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_publish_to_full_slot_does_not_block() {
        let worker = Worker::new(1, SearchRange::new(0, 15), Arc::from("BA"), 2, abcd());
        let cancel = AtomicBool::new(false);
        let (tx, rx) = bounded(1);
        tx.send(Found {
            worker_id: 0,
            index: 0,
            candidate: "AA".to_string(),
        })
        .unwrap();

        let report = worker.scan(&cancel, &tx);

        assert_eq!(report.outcome, ScanOutcome::Matched(1));
        // The first publish stays in the slot, the late one is discarded
        assert_eq!(rx.try_recv().unwrap().worker_id, 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_publish_after_receiver_dropped() {
        let worker = Worker::new(0, SearchRange::new(0, 15), Arc::from("AB"), 2, abcd());
        let cancel = AtomicBool::new(false);
        let (tx, rx) = bounded(1);
        drop(rx);

        let report = worker.scan(&cancel, &tx);
        assert_eq!(report.outcome, ScanOutcome::Matched(4));
    }
}
