//! Plain-text file backend
//!
//! The record is a single UTF-8 integer. Writes go to a sibling temp file
//! that is then renamed over the record, so an abrupt exit leaves either the
//! old or the new value, never half of one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{BestScoreStore, parse_record};
use crate::error::StoreError;

/// Default location of the record, relative to the working directory
pub const DEFAULT_BEST_PATH: &str = "game_data/personal_best.txt";

#[derive(Debug, Clone)]
pub struct FileBestStore {
    path: PathBuf,
}

impl FileBestStore {
    /// Open the record at `path`, creating it with `0` if it does not exist
    ///
    /// Failing to create the file is logged and otherwise ignored; reads then
    /// fall back to 0 and the next write retries.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = Self { path: path.into() };
        if !store.path.exists() {
            match store.write_record(0) {
                Ok(()) => log::info!("Created personal best record at {}", store.path.display()),
                Err(e) => log::warn!("{}", e),
            }
        }
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record, surfacing I/O problems instead of defaulting
    pub fn try_read(&self) -> Result<Option<u64>, StoreError> {
        let text = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_record(&text))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_record(&self, score: u64) -> Result<(), StoreError> {
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }

        let tmp = self.tmp_path();
        let staged = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(score.to_string().as_bytes())?;
            file.sync_all()
        });
        if let Err(source) = staged.and_then(|()| fs::rename(&tmp, &self.path)) {
            // Don't leave a half-written sibling behind
            if let Err(e) = fs::remove_file(&tmp) {
                log::debug!("Could not remove {}: {}", tmp.display(), e);
            }
            return Err(write_err(source));
        }
        Ok(())
    }
}

impl BestScoreStore for FileBestStore {
    fn read(&self) -> u64 {
        match self.try_read() {
            Ok(Some(best)) => best,
            Ok(None) => {
                log::warn!(
                    "Personal best record at {} is corrupt, treating as 0",
                    self.path.display()
                );
                0
            }
            Err(e) => {
                log::warn!("{}, treating as 0", e);
                0
            }
        }
    }

    fn write(&mut self, score: u64) -> Result<(), StoreError> {
        self.write_record(score)?;
        log::info!("Personal best saved ({})", score);
        Ok(())
    }
}
