pub mod orp;
pub mod playback;
pub mod punctuation;
pub mod timing;
pub mod token;

pub use orp::calculate_orp;
pub use playback::{Playback, PlaybackState, ToggleOutcome};
pub use punctuation::{extract_punctuation, Fragments};
pub use timing::{
    calculate_pause_duration, ease_up_wpm, tokenize_text, unit_delay, wpm_to_milliseconds,
};
pub use token::ReadingUnit;
