//! Per-view countdown value

use std::time::Duration;

use crate::state::Timer;

/// Milliseconds removed by one tick
pub const TICK_MS: i64 = 50;

/// Period between two ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_MS as u64);

/// Remaining time of one mounted timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total_ms: i64,
    remaining_ms: i64,
}

impl Countdown {
    /// Seed a countdown with `duration_ms`; non-positive durations start finished
    pub fn new(duration_ms: i64) -> Self {
        Self {
            total_ms: duration_ms,
            remaining_ms: duration_ms.max(0),
        }
    }

    pub fn from_timer(timer: &Timer) -> Self {
        Self::new(timer.duration_ms())
    }

    /// Remove one tick, never going below zero
    ///
    /// Returns false when the countdown was already finished.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.remaining_ms = (self.remaining_ms - TICK_MS).max(0);
        true
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_ms <= 0
    }

    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    pub fn total_ms(&self) -> i64 {
        self.total_ms
    }

    /// Share of the duration still left, from 1.0 (full) to 0.0 (empty)
    pub fn fraction(&self) -> f64 {
        if self.total_ms <= 0 {
            return 0.0;
        }
        (self.remaining_ms as f64 / self.total_ms as f64).clamp(0.0, 1.0)
    }

    /// Remaining seconds with two decimals, e.g. `10.00`
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.remaining_ms as f64 / 1000.0)
    }
}
