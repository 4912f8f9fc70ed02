//! Save/load persistence
//!
//! Features:
//! - Key-value store abstraction (LocalStorage on web, files on native, memory in tests)
//! - Versioned JSON records
//! - Best-score tracking that survives a broken backend

pub mod best_score;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use best_score::{BEST_SCORE_KEY, BestScore, BestScoreRecord};

/// Failures reported by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("record serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("corrupt record under {key:?}: {reason}")]
    Corrupt { key: String, reason: String },
}

/// A string key-value store, the shape of browser LocalStorage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Read and decode a JSON record; `Ok(None)` when the key is absent
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON record
pub fn save_json<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// Box the opened backend, or a volatile store when it failed to open
pub fn store_or_memory<S: KeyValueStore + 'static>(
    opened: Result<S, StorageError>,
) -> Box<dyn KeyValueStore> {
    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Storage unavailable ({e}); progress will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
