//! Autosave clock

use std::time::Duration;

use crate::markup::stripped_len;

/// Characters of stripped text per second of autosave interval
pub const CHARS_PER_SECOND: f64 = 1000.0;

/// Elapsed-time counter that reports when a save is due.
///
/// The interval is fixed when the clock is created; it does not follow the
/// document as it grows or shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoSave {
    interval: Duration,
    elapsed: Duration,
    enabled: bool,
}

impl AutoSave {
    /// Interval of one second per thousand stripped characters
    pub fn for_document(text: &str) -> Self {
        let secs = stripped_len(text) as f64 / CHARS_PER_SECOND;
        Self::with_interval(Duration::from_secs_f64(secs))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            enabled: true,
        }
    }

    /// A clock that never comes due
    pub fn disabled() -> Self {
        Self {
            interval: Duration::ZERO,
            elapsed: Duration::ZERO,
            enabled: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Advance the clock. Returns true when a save is due; the caller saves
    /// and then calls [`reset`](Self::reset).
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.enabled {
            return false;
        }
        self.elapsed += dt;
        self.elapsed >= self.interval
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
