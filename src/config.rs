// Reader settings persisted between sessions.
// Defaults match what a first-time reader sees before touching anything.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Allowed words-per-minute range for live adjustments.
pub const WPM_RANGE: RangeInclusive<u32> = 50..=2000;

/// Step used by the `+` / `-` keys.
pub const WPM_STEP: i32 = 25;

/// User-facing reader settings, stored as flat camelCase JSON.
///
/// Each field falls back to its own default when missing from the stored
/// record, so older or hand-edited files still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderSettings {
    /// Words per minute (default 400)
    pub wpm: u32,

    /// Display font size in pixels (default 64)
    pub font_size: u32,

    /// Font family identifier (default "adobe-garamond-pro")
    pub font_family: String,

    /// Dark palette (default true)
    pub dark_mode: bool,

    /// Ramp up to full speed when playback starts (default true)
    pub ease_up: bool,

    /// Length of the ramp in seconds (default 3)
    pub ease_up_seconds: u32,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            wpm: 400,
            font_size: 64,
            font_family: "adobe-garamond-pro".to_string(),
            dark_mode: true,
            ease_up: true,
            ease_up_seconds: 3,
        }
    }
}

impl ReaderSettings {
    pub fn adjust_wpm(&mut self, delta: i32) {
        let new_wpm = self.wpm as i32 + delta;
        self.wpm = new_wpm.clamp(*WPM_RANGE.start() as i32, *WPM_RANGE.end() as i32) as u32;
    }

    pub fn set_wpm(&mut self, wpm: u32) {
        self.wpm = wpm.clamp(*WPM_RANGE.start(), *WPM_RANGE.end());
    }

    /// Builds settings from a stored JSON object one field at a time.
    ///
    /// A field that is missing, null or of the wrong type keeps its default;
    /// the other fields still load.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let mut settings = Self::default();
        take_field(record, "wpm", &mut settings.wpm);
        take_field(record, "fontSize", &mut settings.font_size);
        take_field(record, "fontFamily", &mut settings.font_family);
        take_field(record, "darkMode", &mut settings.dark_mode);
        take_field(record, "easeUp", &mut settings.ease_up);
        take_field(record, "easeUpSeconds", &mut settings.ease_up_seconds);
        settings
    }

    /// The ease-up window, or zero when ease-up is switched off.
    pub fn ease_up_window(&self) -> Duration {
        if self.ease_up {
            Duration::from_secs(self.ease_up_seconds as u64)
        } else {
            Duration::ZERO
        }
    }
}

fn take_field<T: DeserializeOwned>(record: &Map<String, Value>, key: &str, slot: &mut T) {
    match record.get(key) {
        None | Some(Value::Null) => {}
        Some(value) => match T::deserialize(value) {
            Ok(parsed) => *slot = parsed,
            Err(err) => log::warn!("Ignoring stored setting {}: {}", key, err),
        },
    }
}
