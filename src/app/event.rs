/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    LoadText { text: String, source: String },
    FetchFeatured,
    FetchRandom,
    TogglePlay,
    Back,
    Forward,
    NextSentence,
    PreviousSentence,
    Seek(usize),
    Reset,
    AdjustWpm(i32),
    SetWpm(u32),
    SetEaseUp(bool),
    SetEaseUpSeconds(u32),
    SetDarkMode(bool),
    SetFontSize(u32),
    SetFontFamily(String),
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
