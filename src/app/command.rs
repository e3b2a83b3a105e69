//! Command deck parsing
//!
//! Parses the one-line input typed in Command mode:
//! - `:q` / `:quit`, `:h` / `:help`
//! - `@path` → load a file (PDF, EPUB, anything else as text)
//! - `@@` or a bare `@` → load the clipboard
//! - `:wiki` → today's featured Wikipedia article, `:random` → a random one
//! - `:wpm N`, `:ease on|off`, `:ease-secs N`, `:dark on|off`,
//!   `:font-size N`, `:font NAME`
//! - `:seek N` (1-based word number), `:reset`

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    FeaturedArticle,
    RandomArticle,
    SetWpm(u32),
    SetEaseUp(bool),
    SetEaseUpSeconds(u32),
    SetDarkMode(bool),
    SetFontSize(u32),
    SetFontFamily(String),
    Seek(usize),
    Reset,
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        return if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        };
    }

    let Some(body) = input.strip_prefix(':') else {
        return Command::Unknown(input.to_string());
    };

    let (name, arg) = match body.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (body, ""),
    };

    let parsed = match (name, arg) {
        ("q" | "quit", "") => Some(Command::Quit),
        ("h" | "help", "") => Some(Command::Help),
        ("wiki", "") => Some(Command::FeaturedArticle),
        ("random", "") => Some(Command::RandomArticle),
        ("reset", "") => Some(Command::Reset),
        ("wpm", n) => n.parse().ok().map(Command::SetWpm),
        ("ease", flag) => parse_flag(flag).map(Command::SetEaseUp),
        ("ease-secs", n) => n.parse().ok().map(Command::SetEaseUpSeconds),
        ("dark", flag) => parse_flag(flag).map(Command::SetDarkMode),
        ("font-size", n) => n.parse().ok().filter(|&n| n > 0).map(Command::SetFontSize),
        ("font", family) if !family.is_empty() => Some(Command::SetFontFamily(family.to_string())),
        ("seek", n) => n
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .map(|n| Command::Seek(n - 1)),
        _ => None,
    };

    parsed.unwrap_or_else(|| Command::Unknown(input.to_string()))
}

fn parse_flag(flag: &str) -> Option<bool> {
    match flag {
        "on" | "true" | "yes" => Some(true),
        "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::FeaturedArticle => AppEvent::FetchFeatured,
        Command::RandomArticle => AppEvent::FetchRandom,
        Command::SetWpm(wpm) => AppEvent::SetWpm(wpm),
        Command::SetEaseUp(on) => AppEvent::SetEaseUp(on),
        Command::SetEaseUpSeconds(secs) => AppEvent::SetEaseUpSeconds(secs),
        Command::SetDarkMode(on) => AppEvent::SetDarkMode(on),
        Command::SetFontSize(size) => AppEvent::SetFontSize(size),
        Command::SetFontFamily(family) => AppEvent::SetFontFamily(family),
        Command::Seek(index) => AppEvent::Seek(index),
        Command::Reset => AppEvent::Reset,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
