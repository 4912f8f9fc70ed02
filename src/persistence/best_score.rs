//! Best-score record
//!
//! The only state that outlives a session. If the backend fails, the score
//! keeps being tracked in memory for the rest of the process.

use serde::{Deserialize, Serialize};

use super::{KeyValueStore, save_json};

/// Storage key (shared with the legacy web build)
pub const BEST_SCORE_KEY: &str = "bestScore";

/// Current record format version
const RECORD_VERSION: u32 = 1;

/// On-disk form of the best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub version: u32,
    pub best_score: u64,
}

impl BestScoreRecord {
    /// Accepts the versioned record or a bare integer string
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str::<BestScoreRecord>(raw)
            .ok()
            .or_else(|| {
                raw.trim().parse::<u64>().ok().map(|best_score| Self {
                    version: 0,
                    best_score,
                })
            })
    }
}

/// Best score with optional persistent backing
pub struct BestScore {
    store: Option<Box<dyn KeyValueStore>>,
    best: u64,
}

impl BestScore {
    /// Read the stored best score. An unreachable backend degrades to memory only.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        match store.get(BEST_SCORE_KEY) {
            Ok(Some(raw)) => {
                let best = match BestScoreRecord::parse(&raw) {
                    Some(record) => record.best_score,
                    None => {
                        log::warn!("Ignoring unreadable best score record {raw:?}");
                        0
                    }
                };
                log::info!("Loaded best score {best}");
                Self {
                    store: Some(store),
                    best,
                }
            }
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                Self {
                    store: Some(store),
                    best: 0,
                }
            }
            Err(e) => {
                log::warn!("Best score storage unavailable ({e}); keeping it in memory");
                Self::in_memory()
            }
        }
    }

    /// Best score that is never written anywhere
    pub fn in_memory() -> Self {
        Self {
            store: None,
            best: 0,
        }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Whether writes still reach a backend
    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    /// Keep `score` if it beats the best. Returns true on a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;

        let record = BestScoreRecord {
            version: RECORD_VERSION,
            best_score: score,
        };
        let failure = match self.store.as_mut() {
            Some(store) => save_json(&mut **store, BEST_SCORE_KEY, &record).err(),
            None => None,
        };
        if let Some(e) = failure {
            log::warn!("Failed to save best score ({e}); keeping it in memory");
            self.store = None;
        } else if self.store.is_some() {
            log::info!("Best score saved ({score})");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, StorageError};
    use crate::persistence::tests::BrokenStore;

    #[test]
    fn test_parse_versioned_and_legacy() {
        assert_eq!(
            BestScoreRecord::parse(r#"{"version":1,"best_score":870}"#).map(|r| r.best_score),
            Some(870)
        );
        assert_eq!(BestScoreRecord::parse("1234").map(|r| r.best_score), Some(1234));
        assert_eq!(BestScoreRecord::parse(" 55\n").map(|r| r.best_score), Some(55));
        assert!(BestScoreRecord::parse("lots").is_none());
    }

    #[test]
    fn test_load_legacy_value() {
        let mut store = MemoryStore::new();
        store.set(BEST_SCORE_KEY, "4100").unwrap();
        let best = BestScore::load(Box::new(store));
        assert_eq!(best.best(), 4100);
        assert!(best.is_persistent());
    }

    #[test]
    fn test_record_only_improvements() {
        let mut best = BestScore::load(Box::new(MemoryStore::new()));
        assert!(best.record(300));
        assert!(!best.record(200));
        assert!(!best.record(300));
        assert_eq!(best.best(), 300);
    }

    #[test]
    fn test_corrupt_record_starts_from_zero_but_stays_persistent() {
        let mut store = MemoryStore::new();
        store.set(BEST_SCORE_KEY, "{oops").unwrap();
        let best = BestScore::load(Box::new(store));
        assert_eq!(best.best(), 0);
        assert!(best.is_persistent());
    }

    #[test]
    fn test_broken_backend_degrades_to_memory() {
        let mut best = BestScore::load(Box::new(BrokenStore));
        assert!(!best.is_persistent());
        assert!(best.record(900));
        assert_eq!(best.best(), 900);
    }

    /// Reads fine, fails on write
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(Some("10".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".into()))
        }
    }

    #[test]
    fn test_write_failure_degrades_to_memory() {
        let mut best = BestScore::load(Box::new(ReadOnlyStore));
        assert_eq!(best.best(), 10);
        assert!(best.is_persistent());
        assert!(best.record(20));
        assert!(!best.is_persistent());
        assert!(best.record(30));
        assert_eq!(best.best(), 30);
    }
}
