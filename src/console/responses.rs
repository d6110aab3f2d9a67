//! Console reply structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::TimerState;

/// Reply to a state change command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub state: TimerState,
}

impl ActionResponse {
    /// Create a reply whose status mirrors the running flag of `state`
    pub fn new(message: String, state: TimerState) -> Self {
        let status = if state.is_running { "running" } else { "stopped" };
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            state,
        }
    }
}

/// Reply to the status command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub state: TimerState,
    pub uptime: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}
