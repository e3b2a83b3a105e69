use crate::app::mode::AppMode;
use crate::reading::{PlaybackState, ReadingUnit};

/// Snapshot of everything the UI draws in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub playback: PlaybackState,
    pub current: Option<ReadingUnit>,
    pub context_left: Vec<String>,
    pub context_right: Vec<String>,
    pub progress: (usize, usize),
    pub wpm: u32,
    pub dark_mode: bool,
    pub command_input: String,
    pub status: Option<String>,
}

impl RenderState {
    /// Create an empty render state for when no document is loaded
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            playback: PlaybackState::Idle,
            current: None,
            context_left: vec![],
            context_right: vec![],
            progress: (0, 0),
            wpm: 0,
            dark_mode: true,
            command_input: String::new(),
            status: None,
        }
    }

    /// Fills the word and its surrounding context from the sequence.
    pub fn with_units(mut self, units: &[ReadingUnit], current_index: usize, window: usize) -> Self {
        if units.is_empty() {
            return self;
        }
        let current_index = current_index.min(units.len() - 1);

        let start = current_index.saturating_sub(window);
        self.context_left = units[start..current_index]
            .iter()
            .map(|u| u.text.clone())
            .collect();

        let end = std::cmp::min(current_index + window + 1, units.len());
        self.context_right = units[current_index + 1..end]
            .iter()
            .map(|u| u.text.clone())
            .collect();

        self.current = Some(units[current_index].clone());
        self.progress = (current_index, units.len());
        self
    }
}
