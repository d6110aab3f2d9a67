//! Timer state snapshot and the actions that transition it

use serde::{Deserialize, Serialize};

use super::Timer;

/// Snapshot of the shared timer state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Global gate: no countdown advances while this is false
    pub is_running: bool,
    /// Registered timers in insertion order (append-only)
    pub timers: Vec<Timer>,
}

/// Named transitions accepted by the store
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddTimer(Timer),
    StartTimer,
    StopTimer,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddTimer(_) => "ADD_TIMER",
            Action::StartTimer => "START_TIMER",
            Action::StopTimer => "STOP_TIMER",
        }
    }
}

impl TimerState {
    /// Create the initial state: running, with no timers
    pub fn new() -> Self {
        Self {
            is_running: true,
            timers: Vec::new(),
        }
    }

    /// Produce the state that follows `action`, leaving `self` untouched
    pub fn reduce(&self, action: &Action) -> Self {
        match action {
            Action::StartTimer => Self {
                is_running: true,
                timers: self.timers.clone(),
            },
            Action::StopTimer => Self {
                is_running: false,
                timers: self.timers.clone(),
            },
            Action::AddTimer(timer) => {
                let mut timers = Vec::with_capacity(self.timers.len() + 1);
                timers.extend(self.timers.iter().cloned());
                timers.push(timer.clone());
                Self {
                    is_running: self.is_running,
                    timers,
                }
            }
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
