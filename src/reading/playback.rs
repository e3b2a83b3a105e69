use crate::config::ReaderSettings;
use crate::reading::timing::{ease_up_wpm, unit_delay};
use crate::reading::ReadingUnit;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
}

/// Result of pressing play/pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Started,
    Paused,
    /// Nothing is loaded; the caller should ask for text.
    NeedsText,
}

/// Owns the reading sequence and the position within it.
///
/// All time-dependent calls take `now` from the caller, so the controller
/// never reads the clock itself.
pub struct Playback {
    units: Vec<ReadingUnit>,
    index: usize,
    state: PlaybackState,
    started_at: Option<Instant>,
    next_advance_at: Option<Instant>,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Playback {
    pub fn new(units: Vec<ReadingUnit>) -> Self {
        Self {
            units,
            index: 0,
            state: PlaybackState::Idle,
            started_at: None,
            next_advance_at: None,
        }
    }

    /// Replaces the whole sequence and rewinds.
    pub fn load(&mut self, units: Vec<ReadingUnit>) {
        self.units = units;
        self.reset();
    }

    /// Moves to a saved position without touching the play state.
    pub fn restore(&mut self, index: usize) {
        self.index = self.clamp_index(index);
    }

    pub fn units(&self) -> &[ReadingUnit] {
        &self.units
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn current(&self) -> Option<&ReadingUnit> {
        self.units.get(self.index)
    }

    /// (current index, total units)
    pub fn progress(&self) -> (usize, usize) {
        (self.index, self.units.len())
    }

    pub fn toggle(&mut self, now: Instant, settings: &ReaderSettings) -> ToggleOutcome {
        if self.units.is_empty() {
            return ToggleOutcome::NeedsText;
        }

        if self.is_playing() {
            self.stop(PlaybackState::Paused);
            return ToggleOutcome::Paused;
        }

        if self.index >= self.last_index() {
            self.index = 0;
        }
        self.state = PlaybackState::Playing;
        self.started_at = Some(now);
        self.next_advance_at = Some(now + self.current_delay(now, settings));
        ToggleOutcome::Started
    }

    /// Stops a running playback in place; does nothing otherwise.
    pub fn pause(&mut self) {
        if self.is_playing() {
            self.stop(PlaybackState::Paused);
        }
    }

    pub fn seek(&mut self, index: usize) {
        if self.units.is_empty() {
            self.reset();
            return;
        }
        self.index = self.clamp_index(index);
        self.stop(PlaybackState::Paused);
    }

    pub fn back(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.stop(PlaybackState::Paused);
        }
    }

    pub fn forward(&mut self) {
        if self.index < self.last_index() {
            self.index += 1;
            self.stop(PlaybackState::Paused);
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.stop(PlaybackState::Idle);
    }

    /// Advances at most one unit if its display time is up.
    ///
    /// Returns true when the index moved. Running past the last unit pauses
    /// playback on it.
    pub fn tick(&mut self, now: Instant, settings: &ReaderSettings) -> bool {
        if !self.is_playing() {
            return false;
        }
        let due = match self.next_advance_at {
            Some(deadline) => now >= deadline,
            None => true,
        };
        if !due {
            return false;
        }

        if self.index >= self.last_index() {
            log::info!("Playback finished at unit {}", self.index);
            self.stop(PlaybackState::Paused);
            return false;
        }

        self.index += 1;
        self.next_advance_at = Some(now + self.current_delay(now, settings));
        true
    }

    /// Time left before the next advance, if playing.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_advance_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Index of the next unit that opens a sentence, if any.
    pub fn find_next_sentence_start(&self) -> Option<usize> {
        let start = self.index.saturating_add(1);
        (start..self.units.len()).find(|&i| self.is_sentence_start(i))
    }

    /// Index of the closest sentence opening before the current unit.
    pub fn find_previous_sentence_start(&self) -> Option<usize> {
        if self.index == 0 {
            return None;
        }
        (0..self.index).rev().find(|&i| self.is_sentence_start(i))
    }

    pub fn jump_to_next_sentence(&mut self) -> bool {
        match self.find_next_sentence_start() {
            Some(index) => {
                self.seek(index);
                true
            }
            None => false,
        }
    }

    pub fn jump_to_previous_sentence(&mut self) -> bool {
        match self.find_previous_sentence_start() {
            Some(index) => {
                self.seek(index);
                true
            }
            None => false,
        }
    }

    fn is_sentence_start(&self, index: usize) -> bool {
        match index.checked_sub(1).and_then(|prev| self.units.get(prev)) {
            None => true,
            Some(prev) => prev.punctuation.contains(['.', '!', '?']),
        }
    }

    fn current_delay(&self, now: Instant, settings: &ReaderSettings) -> Duration {
        let elapsed = self
            .started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        let wpm = ease_up_wpm(settings.wpm, elapsed, settings.ease_up_window());
        self.current()
            .map(|unit| unit_delay(unit, wpm))
            .unwrap_or_default()
    }

    fn stop(&mut self, state: PlaybackState) {
        self.state = state;
        self.started_at = None;
        self.next_advance_at = None;
    }

    fn last_index(&self) -> usize {
        self.units.len().saturating_sub(1)
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }
}
