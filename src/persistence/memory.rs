//! In-process backend

use super::BestScoreStore;
use crate::error::StoreError;

/// Best score held in memory; optionally refuses writes to simulate a full disk
#[derive(Debug, Clone, Default)]
pub struct MemoryBestStore {
    best: Option<u64>,
    read_only: bool,
    /// Number of successful writes
    pub writes: u32,
}

impl MemoryBestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `best`
    pub fn with_best(best: u64) -> Self {
        Self {
            best: Some(best),
            ..Self::default()
        }
    }

    /// Store whose writes always fail
    pub fn read_only(best: u64) -> Self {
        Self {
            best: Some(best),
            read_only: true,
            writes: 0,
        }
    }
}

impl BestScoreStore for MemoryBestStore {
    fn read(&self) -> u64 {
        self.best.unwrap_or(0)
    }

    fn write(&mut self, score: u64) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Unavailable("memory store is read-only".to_string()));
        }
        self.best = Some(score);
        self.writes += 1;
        Ok(())
    }
}
