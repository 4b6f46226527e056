//! Game-over settlement of the personal best
//!
//! The store overwrites whatever it is given; this module owns the rule that
//! only a strictly higher score replaces the record.

use std::fmt;

use crate::error::StoreError;
use crate::persistence::BestScoreStore;

/// Check if a score beats the current best (ties do not count)
#[inline]
pub fn qualifies(score: u64, best: u64) -> bool {
    score > best
}

/// Result of settling one finished run
#[derive(Debug)]
pub struct RunSummary {
    /// Final score of the run
    pub score: u64,
    /// Best score before this run
    pub previous_best: u64,
    /// The run beat the previous best
    pub new_best: bool,
    /// Set when the new best could not be saved; the run still counts
    pub write_error: Option<StoreError>,
}

impl RunSummary {
    /// Best score as far as the player is concerned
    pub fn best(&self) -> u64 {
        if self.new_best {
            self.score
        } else {
            self.previous_best
        }
    }

    /// Whether the new best made it to the store
    pub fn saved(&self) -> bool {
        self.new_best && self.write_error.is_none()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.new_best {
            write!(f, "You got a new personal best of {}!", self.score)
        } else {
            write!(f, "Score: {} (personal best: {})", self.score, self.previous_best)
        }
    }
}

/// Record a finished run against the store
///
/// Writes only when `score` is strictly greater than the stored best. A
/// failed write is reported in the summary, never dropped and never fatal.
pub fn settle_run<S: BestScoreStore + ?Sized>(store: &mut S, score: u64) -> RunSummary {
    let previous_best = store.read();
    let new_best = qualifies(score, previous_best);

    let write_error = if new_best {
        match store.write(score) {
            Ok(()) => None,
            Err(e) => {
                log::warn!("Could not save new personal best {}: {}", score, e);
                Some(e)
            }
        }
    } else {
        None
    };

    RunSummary {
        score,
        previous_best,
        new_best,
        write_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryBestStore;

    #[test]
    fn test_qualifies_strictly() {
        assert!(qualifies(1, 0));
        assert!(!qualifies(0, 0));
        assert!(!qualifies(50, 50));
        assert!(!qualifies(30, 50));
    }

    #[test]
    fn test_higher_score_is_written() {
        let mut store = MemoryBestStore::new();
        let summary = settle_run(&mut store, 50);
        assert!(summary.new_best);
        assert!(summary.saved());
        assert_eq!(summary.previous_best, 0);
        assert_eq!(store.read(), 50);
        assert_eq!(summary.to_string(), "You got a new personal best of 50!");
    }

    #[test]
    fn test_lower_score_is_not_written() {
        let mut store = MemoryBestStore::with_best(50);
        let summary = settle_run(&mut store, 30);
        assert!(!summary.new_best);
        assert_eq!(summary.best(), 50);
        assert_eq!(store.read(), 50);
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_tie_is_not_written() {
        let mut store = MemoryBestStore::with_best(50);
        let summary = settle_run(&mut store, 50);
        assert!(!summary.new_best);
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_write_failure_keeps_result() {
        let mut store = MemoryBestStore::read_only(10);
        let summary = settle_run(&mut store, 99);
        assert_eq!(summary.score, 99);
        assert!(summary.new_best);
        assert!(!summary.saved());
        assert!(summary.write_error.is_some());
        assert_eq!(summary.best(), 99);
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut store: Box<dyn BestScoreStore> = Box::new(MemoryBestStore::with_best(5));
        let summary = settle_run(store.as_mut(), 6);
        assert!(summary.saved());
        assert_eq!(store.read(), 6);
    }
}
