//! Browser LocalStorage backend (wasm32 only)

use super::{BestScoreStore, parse_record};
use crate::error::StoreError;

pub struct LocalStorageBestStore {
    key: String,
}

impl LocalStorageBestStore {
    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "speed_racer_personal_best";

    /// Open the record, writing `0` if none exists yet
    pub fn open() -> Self {
        let store = Self {
            key: Self::STORAGE_KEY.to_string(),
        };
        if let Some(storage) = Self::storage() {
            if let Ok(None) = storage.get_item(&store.key) {
                let _ = storage.set_item(&store.key, "0");
                log::info!("No personal best found, starting fresh");
            }
        }
        store
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl BestScoreStore for LocalStorageBestStore {
    fn read(&self) -> u64 {
        Self::storage()
            .and_then(|s| s.get_item(&self.key).ok().flatten())
            .and_then(|text| parse_record(&text))
            .unwrap_or(0)
    }

    fn write(&mut self, score: u64) -> Result<(), StoreError> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage not available".to_string()))?;
        storage
            .set_item(&self.key, &score.to_string())
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        log::info!("Personal best saved ({})", score);
        Ok(())
    }
}
