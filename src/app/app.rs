use super::command::{command_to_app_event, parse_command};
use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::config::{ReaderSettings, WPM_STEP};
use crate::input::{self, ArticleSource, LoadError, LoadedDocument};
use crate::reading::{tokenize_text, Playback, ToggleOutcome};
use crate::storage::{KeyValueStore, PositionDebouncer, ReaderStore};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// Words of context shown on each side of the current word.
const CONTEXT_WINDOW: usize = 1;

pub struct App {
    mode: AppMode,
    playback: Playback,
    settings: ReaderSettings,
    store: ReaderStore<Box<dyn KeyValueStore>>,
    articles: Box<dyn ArticleSource>,
    debouncer: PositionDebouncer,
    last_position: usize,
    command_input: String,
    status: Option<String>,
}

impl App {
    /// Builds the app from persisted state: settings, last document and the
    /// saved position within it.
    pub fn new(store: Box<dyn KeyValueStore>, articles: Box<dyn ArticleSource>) -> Self {
        let store = ReaderStore::new(store);
        let settings = store.load_settings();

        let mut playback = Playback::default();
        if let Some(text) = store.load_text() {
            playback.load(tokenize_text(&text));
            playback.restore(store.load_position());
            log::info!(
                "Restored document with {} words at position {}",
                playback.units().len(),
                playback.index()
            );
        }

        let mode = if playback.is_empty() {
            AppMode::Command
        } else {
            AppMode::Reading
        };

        Self {
            mode,
            last_position: playback.index(),
            playback,
            settings,
            store,
            articles,
            debouncer: PositionDebouncer::default(),
            command_input: String::new(),
            status: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn settings(&self) -> &ReaderSettings {
        &self.settings
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn get_wpm(&self) -> u32 {
        self.settings.wpm
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn store(&self) -> &ReaderStore<Box<dyn KeyValueStore>> {
        &self.store
    }

    pub fn handle_key(&mut self, code: KeyCode, now: Instant) {
        match self.mode {
            AppMode::Command => self.handle_command_key(code, now),
            AppMode::Reading => {
                self.handle_event(reading_key_event(code), now);
                if let KeyCode::Char(c @ (':' | '@')) = code {
                    self.open_command_deck(c);
                }
            }
            AppMode::Help => match code {
                KeyCode::Char('q') => self.handle_event(AppEvent::Quit, now),
                _ => self.mode = AppMode::Reading,
            },
            AppMode::Quit => {}
        }
    }

    fn handle_command_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.command_input);
                self.mode = AppMode::Reading;
                if input.trim().is_empty() {
                    return;
                }
                let event = command_to_app_event(parse_command(&input));
                self.handle_event(event, now);
            }
            KeyCode::Esc => {
                self.command_input.clear();
                self.mode = AppMode::Reading;
            }
            KeyCode::Backspace => {
                self.command_input.pop();
            }
            KeyCode::Char(c) => self.command_input.push(c),
            _ => {}
        }
    }

    fn open_command_deck(&mut self, prefix: char) {
        self.playback.pause();
        self.command_input = prefix.to_string();
        self.mode = AppMode::Command;
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::LoadFile(path) => {
                let result = input::load_path(&path);
                self.finish_load(result);
            }
            AppEvent::LoadClipboard => {
                let result = input::clipboard::load();
                self.finish_load(result);
            }
            AppEvent::LoadText { text, source } => {
                let result = LoadedDocument::new(text, source);
                self.finish_load(result);
            }
            AppEvent::FetchFeatured => {
                let today = chrono::Local::now().date_naive();
                let result = self
                    .articles
                    .featured(today)
                    .map(LoadedDocument::from)
                    .ok_or(LoadError::ArticleUnavailable);
                self.finish_load(result);
            }
            AppEvent::FetchRandom => {
                let result = self
                    .articles
                    .random()
                    .map(LoadedDocument::from)
                    .ok_or(LoadError::ArticleUnavailable);
                self.finish_load(result);
            }
            AppEvent::TogglePlay => match self.playback.toggle(now, &self.settings) {
                ToggleOutcome::NeedsText => {
                    self.status = Some("Load something first: @file, @@ or :wiki".to_string());
                    self.mode = AppMode::Command;
                }
                ToggleOutcome::Started | ToggleOutcome::Paused => {}
            },
            AppEvent::Back => self.playback.back(),
            AppEvent::Forward => self.playback.forward(),
            AppEvent::NextSentence => {
                self.playback.jump_to_next_sentence();
            }
            AppEvent::PreviousSentence => {
                self.playback.jump_to_previous_sentence();
            }
            AppEvent::Seek(index) => self.playback.seek(index),
            AppEvent::Reset => self.playback.reset(),
            AppEvent::AdjustWpm(delta) => self.update_settings(|s| s.adjust_wpm(delta)),
            AppEvent::SetWpm(wpm) => self.update_settings(|s| s.set_wpm(wpm)),
            AppEvent::SetEaseUp(on) => self.update_settings(|s| s.ease_up = on),
            AppEvent::SetEaseUpSeconds(secs) => {
                self.update_settings(|s| s.ease_up_seconds = secs)
            }
            AppEvent::SetDarkMode(on) => self.update_settings(|s| s.dark_mode = on),
            AppEvent::SetFontSize(size) => self.update_settings(|s| s.font_size = size),
            AppEvent::SetFontFamily(family) => self.update_settings(|s| s.font_family = family),
            AppEvent::Quit => {
                self.shutdown();
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => self.mode = AppMode::Help,
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: {}", input));
            }
            AppEvent::None => {}
        }
        self.note_position(now);
    }

    /// Advances playback and flushes a due position write.
    ///
    /// Returns true when something on screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.playback.state();
        let moved = self.playback.tick(now, &self.settings);
        self.note_position(now);
        if let Some(index) = self.debouncer.poll(now) {
            self.persist_position(index);
        }
        moved || before != self.playback.state()
    }

    /// How long the event loop may sleep before `tick` has work to do.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        let debounce = self
            .debouncer
            .deadline()
            .map(|deadline| deadline.saturating_duration_since(now));
        match (self.playback.time_until_next(now), debounce) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Writes any pending position. Called on quit.
    pub fn shutdown(&mut self) {
        if let Some(index) = self.debouncer.flush() {
            self.persist_position(index);
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let mut state = RenderState::empty(self.mode).with_units(
            self.playback.units(),
            self.playback.index(),
            CONTEXT_WINDOW,
        );
        state.playback = self.playback.state();
        state.wpm = self.settings.wpm;
        state.dark_mode = self.settings.dark_mode;
        state.command_input = self.command_input.clone();
        state.status = self.status.clone();
        state
    }

    fn finish_load(&mut self, result: Result<LoadedDocument, LoadError>) {
        match result {
            Ok(document) => self.load_document(document),
            Err(err) => {
                log::warn!("Load failed: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    fn load_document(&mut self, document: LoadedDocument) {
        let units = tokenize_text(&document.text);
        log::info!("Loaded {} ({} words)", document.source, units.len());

        self.status = Some(format!("{} ({} words)", document.source, units.len()));
        self.playback.load(units);
        self.mode = AppMode::Reading;

        self.debouncer.flush();
        self.last_position = 0;
        if let Err(err) = self.store.save_text(&document.text) {
            log::error!("Failed to save text: {}", err);
        }
        self.persist_position(0);
    }

    fn update_settings<F: FnOnce(&mut ReaderSettings)>(&mut self, change: F) {
        change(&mut self.settings);
        log::debug!("Settings changed: {:?}", self.settings);
        if let Err(err) = self.store.save_settings(&self.settings) {
            log::error!("Failed to save settings: {}", err);
            self.status = Some(format!("Settings not saved: {}", err));
        }
    }

    fn note_position(&mut self, now: Instant) {
        let index = self.playback.index();
        if index != self.last_position {
            self.last_position = index;
            self.debouncer.record(index, now);
        }
    }

    fn persist_position(&mut self, index: usize) {
        if let Err(err) = self.store.save_position(index) {
            log::error!("Failed to save position: {}", err);
        }
    }
}

/// Key bindings while the word display is showing.
fn reading_key_event(code: KeyCode) -> AppEvent {
    match code {
        KeyCode::Char(' ') => AppEvent::TogglePlay,
        KeyCode::Left | KeyCode::Char('h') => AppEvent::Back,
        KeyCode::Right | KeyCode::Char('l') => AppEvent::Forward,
        KeyCode::Char('[') => AppEvent::PreviousSentence,
        KeyCode::Char(']') => AppEvent::NextSentence,
        KeyCode::Char('r') => AppEvent::Reset,
        KeyCode::Char('+') | KeyCode::Char('=') => AppEvent::AdjustWpm(WPM_STEP),
        KeyCode::Char('-') => AppEvent::AdjustWpm(-WPM_STEP),
        KeyCode::Char('?') => AppEvent::Help,
        KeyCode::Char('q') => AppEvent::Quit,
        _ => AppEvent::None,
    }
}
