//! Storage backends
//!
//! LocalStorage in the browser, one JSON file per key on native.

use crate::persistence::{KeyValueStore, StorageError};

/// Stores each key as `<dir>/<key>.json`
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_stem}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a temp file then rename, so a crash never leaves half a record
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StorageError::Unavailable("LocalStorage not available".into()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get("bestScore").unwrap(), None);
        store.set("bestScore", "{\"version\":1,\"best_score\":5}").unwrap();
        assert_eq!(
            store.get("bestScore").unwrap().as_deref(),
            Some("{\"version\":1,\"best_score\":5}")
        );
        assert!(dir.path().join("nested").join("bestScore.json").exists());
    }

    #[test]
    fn test_file_store_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("../escape", "1").unwrap();
        assert!(dir.path().join("___escape.json").exists());
        assert_eq!(store.get("../escape").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be
        std::fs::create_dir(dir.path().join("k.json")).unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(store.get("k"), Err(StorageError::Io(_))));
    }
}
