use std::time::{Duration, Instant};

/// Coalesces bursts of events into a single delivery once activity quiesces.
///
/// The clock is injected: callers pass `now` to both `trigger` and `poll`,
/// so the debouncer owns no timers and runs on whatever loop drives it.
/// A new trigger replaces the pending payload and restarts the quiet period.
#[derive(Debug)]
pub struct Debouncer<T> {
    interval: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn trigger(&mut self, now: Instant, payload: T) {
        self.pending = Some((now, payload));
    }

    /// Take the pending payload if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((at, _)) if now.saturating_duration_since(*at) >= self.interval => {
                self.pending.take().map(|(_, payload)| payload)
            }
            _ => None,
        }
    }

    /// Take the pending payload regardless of elapsed time.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(_, payload)| payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
