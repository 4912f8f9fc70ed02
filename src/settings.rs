//! Game settings and preferences
//!
//! Persisted as JSON next to the best score. Unknown or missing fields fall
//! back to defaults so older records keep loading.

use serde::{Deserialize, Serialize};

use crate::consts::SHOOT_COOLDOWN_MS;
use crate::persistence::{KeyValueStore, StorageError, load_json, save_json};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Forward haptic events to the host
    pub vibration_enabled: bool,
    /// Minimum gap between shots (ms)
    pub shoot_cooldown_ms: u32,
    /// Start the first session this long after the first frame; `None` waits for `Start`
    pub autostart_delay_ms: Option<u32>,
    /// Pixels per arrow-key press
    pub keyboard_step: f32,
    /// Ship pixels per pointer pixel while dragging
    pub drag_sensitivity: f32,
    /// A click further than this from its press point counts as a drag, not a shot
    pub tap_slop: f32,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vibration_enabled: true,
            shoot_cooldown_ms: SHOOT_COOLDOWN_MS as u32,
            autostart_delay_ms: Some(1000),
            keyboard_step: 8.0,
            drag_sensitivity: 0.8,
            tap_slop: 10.0,
            seed: None,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "space_defender_settings";

    /// Load settings, falling back to defaults when absent or unreadable
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json::<Settings>(store, Self::STORAGE_KEY) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings ({e}); using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        save_json(store, Self::STORAGE_KEY, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::persistence::tests::BrokenStore;

    #[test]
    fn test_defaults_match_classic_feel() {
        let settings = Settings::default();
        assert_eq!(settings.shoot_cooldown_ms, 300);
        assert_eq!(settings.autostart_delay_ms, Some(1000));
        assert!(settings.vibration_enabled);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            vibration_enabled: false,
            seed: Some(7),
            ..Settings::default()
        };
        settings.save(&mut store).unwrap();
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let mut store = MemoryStore::new();
        store
            .set(Settings::STORAGE_KEY, r#"{"keyboard_step": 12.0}"#)
            .unwrap();
        let settings = Settings::load(&store);
        assert_eq!(settings.keyboard_step, 12.0);
        assert_eq!(settings.shoot_cooldown_ms, 300);
    }

    #[test]
    fn test_broken_store_gives_defaults() {
        assert_eq!(Settings::load(&BrokenStore), Settings::default());
    }
}
