//! Leading-edge rate limiter for live `text:input` notifications.
//!
//! The first event in a window goes through and later ones in the same window
//! are dropped. Nothing is queued and no trailing emit is scheduled; the final
//! text is carried by `text:commit` instead.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ThrottleGate {
    interval: Duration,
    last_emit: Option<Instant>,
}

impl ThrottleGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_emit: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_emit(&self) -> Option<Instant> {
        self.last_emit
    }

    /// Admits the event and records `now` if at least `interval` has passed
    /// since the last emit. A dropped event leaves the gate untouched.
    pub fn try_emit(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_emit {
            if now.saturating_duration_since(last) < self.interval {
                return false;
            }
        }
        self.last_emit = Some(now);
        true
    }

    /// Records an emit that bypassed the gate.
    pub fn force(&mut self, now: Instant) {
        self.last_emit = Some(now);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/notifier/throttle.rs"]
mod tests;
