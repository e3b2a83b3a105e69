#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing into the command deck.
    Command,
    /// Showing the word display; playback may be running or paused.
    Reading,
    Help,
    Quit,
}

impl AppMode {
    pub fn label(self) -> &'static str {
        match self {
            AppMode::Command => " COMMAND ",
            AppMode::Reading => " READING ",
            AppMode::Help => " HELP ",
            AppMode::Quit => " QUIT ",
        }
    }
}
