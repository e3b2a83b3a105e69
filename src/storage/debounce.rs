use std::time::{Duration, Instant};

/// Default coalescing window for position writes.
pub const POSITION_DEBOUNCE: Duration = Duration::from_secs(1);

/// Coalesces rapid position updates into a single write.
///
/// Every `record` replaces the pending value and pushes the deadline out to
/// `now + window`; `poll` hands the value back once the deadline passes.
#[derive(Debug, Clone)]
pub struct PositionDebouncer {
    window: Duration,
    pending: Option<(usize, Instant)>,
}

impl Default for PositionDebouncer {
    fn default() -> Self {
        Self::new(POSITION_DEBOUNCE)
    }
}

impl PositionDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn record(&mut self, index: usize, now: Instant) {
        self.pending = Some((index, now + self.window));
    }

    /// Returns the pending index if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        match self.pending {
            Some((index, deadline)) if now >= deadline => {
                self.pending = None;
                Some(index)
            }
            _ => None,
        }
    }

    /// Returns the pending index immediately, regardless of the deadline.
    pub fn flush(&mut self) -> Option<usize> {
        self.pending.take().map(|(index, _)| index)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }
}
