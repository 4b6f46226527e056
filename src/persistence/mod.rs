//! Durable personal-best record
//!
//! Backends:
//! - `FileBestStore`: plain-text integer on disk, replaced atomically
//! - `MemoryBestStore`: in-process, for tests and embedding
//! - `LocalStorageBestStore`: browser LocalStorage (wasm32 only)
//!
//! Reads never fail: a missing or corrupt record counts as 0. Writes overwrite
//! unconditionally; deciding whether a score deserves to be written is the
//! game-over flow's job (see `personal_best`).

pub mod file;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use file::FileBestStore;
pub use memory::MemoryBestStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageBestStore;

use crate::error::StoreError;

/// A single durable best-score value
pub trait BestScoreStore {
    /// Current best, 0 when no usable record exists
    fn read(&self) -> u64;

    /// Replace the stored best with `score`
    fn write(&mut self, score: u64) -> Result<(), StoreError>;
}

/// Parse a stored record; `None` when it is not a plain non-negative integer
pub fn parse_record(text: &str) -> Option<u64> {
    text.trim().parse().ok()
}
