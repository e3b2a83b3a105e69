use super::{KeyValueStore, StorageError, POSITION_KEY, SETTINGS_KEY, TEXT_KEY};
use crate::config::ReaderSettings;
use serde_json::Value;

/// Typed access to the reader's persisted records.
pub struct ReaderStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ReaderStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored settings, or defaults when absent or unreadable.
    pub fn load_settings(&self) -> ReaderSettings {
        let Some(raw) = self.read(SETTINGS_KEY) else {
            return ReaderSettings::default();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(record)) => ReaderSettings::from_record(&record),
            Ok(_) => {
                log::warn!("Stored settings are not a JSON object, using defaults");
                ReaderSettings::default()
            }
            Err(err) => {
                log::warn!("Failed to parse stored settings, using defaults: {}", err);
                ReaderSettings::default()
            }
        }
    }

    pub fn save_settings(&mut self, settings: &ReaderSettings) -> Result<(), StorageError> {
        let json = serde_json::to_string(settings)?;
        self.store.put(SETTINGS_KEY, &json)
    }

    /// The last loaded document, if any.
    pub fn load_text(&self) -> Option<String> {
        self.read(TEXT_KEY).filter(|text| !text.trim().is_empty())
    }

    pub fn save_text(&mut self, text: &str) -> Result<(), StorageError> {
        self.store.put(TEXT_KEY, text)
    }

    /// Saved reading position; anything unparsable reads as 0.
    pub fn load_position(&self) -> usize {
        self.read(POSITION_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn save_position(&mut self, index: usize) -> Result<(), StorageError> {
        self.store.put(POSITION_KEY, &index.to_string())
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Failed to read {}: {}", key, err);
                None
            }
        }
    }
}
