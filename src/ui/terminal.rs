use crate::app::{App, AppMode};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Upper bound on how long the loop sleeps between redraws.
const RENDER_TICK: Duration = Duration::from_millis(1000 / 30);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // dropped after `terminal`, so the screen is restored last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> io::Result<Self> {
        let guard = TerminalGuard::new()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Runs until the app enters `Quit`.
    ///
    /// Each pass sleeps in `poll` until a key arrives, the next word is due,
    /// a position write is due, or the render tick elapses, whichever is
    /// first.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        self.render_frame(app)?;

        while app.mode() != AppMode::Quit {
            let timeout = app
                .next_wakeup(Instant::now())
                .map_or(RENDER_TICK, |wakeup| wakeup.min(RENDER_TICK));

            let mut dirty = false;
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key.code, Instant::now());
                        dirty = true;
                    }
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            dirty |= app.tick(Instant::now());
            if dirty {
                self.render_frame(app)?;
            }
        }

        Ok(())
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        self.terminal.draw(|frame| view::draw(frame, &state))?;
        Ok(())
    }
}
