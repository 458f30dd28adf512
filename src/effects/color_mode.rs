//! Light/dark color mode preference.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Storage key under which the preference persists.
pub const STORAGE_KEY: &str = "color-mode";

/// Color mode preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
    Auto,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::Auto => "auto",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            "auto" => Some(ColorMode::Auto),
            _ => None,
        }
    }
}

/// File-backed stand-in for the client's durable key/value storage.
///
/// A detached store degrades every read and write to a silent no-op, so a
/// missing storage backend never surfaces as an error.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A store with no backing file.
    pub fn detached() -> Self {
        Self { path: None }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let path = self.path.as_ref()?;
        let raw = fs::read_to_string(path).ok()?;
        let map: BTreeMap<String, String> = serde_json::from_str(&raw).ok()?;
        map.get(key).cloned()
    }

    pub fn set(&self, key: &str, value: &str) {
        let Some(path) = self.path.as_ref() else {
            return;
        };

        let mut map: BTreeMap<String, String> = fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        map.insert(key.to_string(), value.to_string());

        match serde_json::to_string_pretty(&map) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    tracing::debug!("Preference store write failed: {}", e);
                }
            }
            Err(e) => tracing::debug!("Preference store encode failed: {}", e),
        }
    }
}

/// Tracks and persists the color mode preference.
///
/// Every change persists synchronously under [`STORAGE_KEY`] before the call
/// returns; a reload restores the last explicit choice. Default is dark when
/// nothing usable is stored.
pub struct ColorModeManager {
    tx: watch::Sender<ColorMode>,
    store: PreferenceStore,
}

impl ColorModeManager {
    pub fn new(store: PreferenceStore) -> Self {
        let initial = store
            .get(STORAGE_KEY)
            .and_then(|v| ColorMode::from_str(&v))
            .unwrap_or(ColorMode::Dark);
        let (tx, _) = watch::channel(initial);
        Self { tx, store }
    }

    /// Current mode.
    pub fn mode(&self) -> ColorMode {
        *self.tx.borrow()
    }

    /// Derived dark flag; `Auto` counts as not dark.
    pub fn is_dark(&self) -> bool {
        self.mode() == ColorMode::Dark
    }

    /// Subscribe to mode changes.
    pub fn subscribe(&self) -> watch::Receiver<ColorMode> {
        self.tx.subscribe()
    }

    /// Flip strictly between light and dark.
    ///
    /// Never yields `Auto`: toggling from `Auto` forces a determinate choice.
    pub fn toggle(&self) -> ColorMode {
        let next = match self.mode() {
            ColorMode::Dark => ColorMode::Light,
            ColorMode::Light | ColorMode::Auto => ColorMode::Dark,
        };
        self.set_mode(next);
        next
    }

    /// Set the mode explicitly; accepts all three values.
    pub fn set_mode(&self, mode: ColorMode) {
        self.store.set(STORAGE_KEY, mode.as_str());
        self.tx.send_replace(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> PreferenceStore {
        PreferenceStore::new(dir.path().join("preferences.json"))
    }

    #[test]
    fn test_defaults_to_dark_when_unset() {
        let dir = TempDir::new().unwrap();
        let manager = ColorModeManager::new(store_in(&dir));
        assert_eq!(manager.mode(), ColorMode::Dark);
        assert!(manager.is_dark());
    }

    #[test]
    fn test_toggle_matrix() {
        let manager = ColorModeManager::new(PreferenceStore::detached());

        assert_eq!(manager.toggle(), ColorMode::Light);
        assert_eq!(manager.toggle(), ColorMode::Dark);

        manager.set_mode(ColorMode::Auto);
        let toggled = manager.toggle();
        assert_ne!(toggled, ColorMode::Auto);
        assert_eq!(toggled, ColorMode::Dark);
    }

    #[test]
    fn test_set_mode_is_authoritative() {
        let manager = ColorModeManager::new(PreferenceStore::detached());
        manager.set_mode(ColorMode::Auto);
        assert_eq!(manager.mode(), ColorMode::Auto);
        assert!(!manager.is_dark());
    }

    #[test]
    fn test_persists_across_reload() {
        let dir = TempDir::new().unwrap();

        let manager = ColorModeManager::new(store_in(&dir));
        manager.set_mode(ColorMode::Light);
        drop(manager);

        let reloaded = ColorModeManager::new(store_in(&dir));
        assert_eq!(reloaded.mode(), ColorMode::Light);
    }

    #[test]
    fn test_garbled_stored_value_falls_back_to_dark() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set(STORAGE_KEY, "sepia");

        let manager = ColorModeManager::new(store);
        assert_eq!(manager.mode(), ColorMode::Dark);
    }

    #[test]
    fn test_detached_store_is_silent() {
        let manager = ColorModeManager::new(PreferenceStore::detached());
        manager.set_mode(ColorMode::Light);
        assert_eq!(manager.mode(), ColorMode::Light);
    }

    #[test]
    fn test_change_notification() {
        let manager = ColorModeManager::new(PreferenceStore::detached());
        let mut rx = manager.subscribe();

        manager.set_mode(ColorMode::Light);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ColorMode::Light);
    }
}
