use std::time::{Duration, Instant};

/// Debounces search input for large collections.
///
/// Poll-based: every keystroke calls `trigger` with the full current text,
/// the event loop polls `settled()` and applies the returned text to the
/// controller. The pending text is held until consumed, so the last
/// keystroke's value is applied exactly once after input settles — a
/// trailing update is never dropped.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    last_event: Option<Instant>,
    pending: Option<String>,
}

impl SearchDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_event: None,
            pending: None,
        }
    }

    /// Record the latest input text, restarting the settle timer.
    pub fn trigger(&mut self, text: impl Into<String>) {
        self.last_event = Some(Instant::now());
        self.pending = Some(text.into());
    }

    /// If the delay has elapsed since the last trigger, take the settled
    /// text. Returns `None` while input is still arriving or nothing is
    /// pending.
    pub fn settled(&mut self) -> Option<String> {
        let last = self.last_event?;
        if last.elapsed() >= self.delay {
            self.last_event = None;
            self.pending.take()
        } else {
            None
        }
    }

    /// Time left before the pending text settles.
    pub fn time_remaining(&self) -> Option<Duration> {
        let last = self.last_event?;
        self.pending.as_ref()?;
        let elapsed = last.elapsed();
        Some(if elapsed >= self.delay {
            Duration::from_millis(0)
        } else {
            self.delay - elapsed
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel any pending update.
    pub fn reset(&mut self) {
        self.last_event = None;
        self.pending = None;
    }
}
