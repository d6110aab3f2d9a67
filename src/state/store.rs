//! Shared timer store

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use super::{Action, Timer, TimerState};

/// Shared handle to the timer state
///
/// Clones point at the same state. Every change goes through [`TimerStore::dispatch`],
/// which swaps in the snapshot produced by [`TimerState::reduce`].
#[derive(Debug, Clone)]
pub struct TimerStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    /// Full snapshots, notified on every dispatch
    state_tx: watch::Sender<TimerState>,
    /// Running flag alone, notified only on real transitions
    running_tx: watch::Sender<bool>,
    /// Last action tracking
    last_action: Mutex<Option<(&'static str, DateTime<Utc>)>>,
    start_time: Instant,
}

impl TimerStore {
    /// Create a store holding the initial state
    pub fn new() -> Self {
        let initial = TimerState::new();
        let (running_tx, _) = watch::channel(initial.is_running);
        let (state_tx, _) = watch::channel(initial);

        Self {
            inner: Arc::new(StoreInner {
                state_tx,
                running_tx,
                last_action: Mutex::new(None),
                start_time: Instant::now(),
            }),
        }
    }

    /// Apply an action and publish the resulting snapshot
    pub fn dispatch(&self, action: Action) -> TimerState {
        debug!("Dispatching {}", action.name());

        let mut next = TimerState::new();
        self.inner.state_tx.send_modify(|state| {
            *state = state.reduce(&action);
            next = state.clone();

            // Published under the state lock so the flag never lags a later snapshot
            self.inner.running_tx.send_if_modified(|running| {
                if *running == state.is_running {
                    return false;
                }
                *running = state.is_running;
                true
            });
        });

        if let Ok(mut last_action) = self.inner.last_action.lock() {
            *last_action = Some((action.name(), Utc::now()));
        }

        next
    }

    /// Append a timer to the end of the list
    pub fn add_timer(&self, timer: Timer) -> TimerState {
        info!("Adding timer '{}' ({}s)", timer.name, timer.duration);
        self.dispatch(Action::AddTimer(timer))
    }

    /// Let every countdown advance
    pub fn start_timer(&self) -> TimerState {
        info!("Starting timers");
        self.dispatch(Action::StartTimer)
    }

    /// Pause every countdown
    pub fn stop_timer(&self) -> TimerState {
        info!("Stopping timers");
        self.dispatch(Action::StopTimer)
    }

    pub fn is_running(&self) -> bool {
        self.inner.state_tx.borrow().is_running
    }

    /// Copy of the registered timers, in insertion order
    pub fn timers(&self) -> Vec<Timer> {
        self.inner.state_tx.borrow().timers.clone()
    }

    pub fn snapshot(&self) -> TimerState {
        self.inner.state_tx.borrow().clone()
    }

    /// Watch full snapshots
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.inner.state_tx.subscribe()
    }

    /// Watch the running flag only
    pub fn subscribe_running(&self) -> watch::Receiver<bool> {
        self.inner.running_tx.subscribe()
    }

    /// Number of live running-flag subscriptions
    pub fn running_subscribers(&self) -> usize {
        self.inner.running_tx.receiver_count()
    }

    /// Name and time of the last dispatched action
    pub fn last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.inner.last_action.lock().ok().and_then(|a| *a) {
            Some((name, time)) => (Some(name.to_string()), Some(time)),
            None => (None, None),
        }
    }

    /// Store lifetime as a formatted string
    pub fn uptime(&self) -> String {
        format_uptime(self.inner.start_time.elapsed().as_secs())
    }
}

impl Default for TimerStore {
    fn default() -> Self {
        Self::new()
    }
}

fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
