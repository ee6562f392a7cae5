use std::time::{Duration, Instant};

/// Trailing-edge debouncer.
///
/// Every `push` replaces the pending value and restarts the quiet window; the
/// value is released by `poll` once the window has elapsed without another
/// push.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn push(&mut self, value: T, now: Option<Instant>) {
        let now = now.unwrap_or_else(Instant::now);
        self.pending = Some((value, now));
    }

    pub fn poll(&mut self, now: Option<Instant>) -> Option<T> {
        let now = now.unwrap_or_else(Instant::now);
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.window => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
