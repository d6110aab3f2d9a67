//! Console command handlers

use tracing::info;

use crate::state::{Timer, TimerStore};
use super::{
    commands::Command,
    responses::{ActionResponse, StatusReport},
};

pub const HELP: &str = "\
commands:
  add NAME=SECONDS   register a timer (also: add NAME SECONDS)
  start              resume every timer
  stop               pause every timer
  status             print the store state as JSON
  help               show this message
  quit               leave";

/// Outcome of one console command
#[derive(Debug, Clone)]
pub enum ConsoleReply {
    Action(ActionResponse),
    Status(StatusReport),
    Help(&'static str),
    Quit,
}

/// Handle `add` - Register a timer
pub fn add_handler(store: &TimerStore, timer: Timer) -> ActionResponse {
    let message = format!("Timer '{}' added ({}s)", timer.name, timer.duration);
    let state = store.add_timer(timer);
    info!("Add command handled - {} timers registered", state.timers.len());
    ActionResponse::new(message, state)
}

/// Handle `start` - Resume every timer
pub fn start_handler(store: &TimerStore) -> ActionResponse {
    let state = store.start_timer();
    info!("Start command handled");
    ActionResponse::new("Timers running".to_string(), state)
}

/// Handle `stop` - Pause every timer
pub fn stop_handler(store: &TimerStore) -> ActionResponse {
    let state = store.stop_timer();
    info!("Stop command handled");
    ActionResponse::new("Timers stopped".to_string(), state)
}

/// Handle `status` - Report the current store state
pub fn status_handler(store: &TimerStore) -> StatusReport {
    let (last_action, last_action_time) = store.last_action();
    StatusReport {
        state: store.snapshot(),
        uptime: store.uptime(),
        last_action,
        last_action_time,
    }
}

pub fn handle_command(store: &TimerStore, command: Command) -> ConsoleReply {
    match command {
        Command::Add(timer) => ConsoleReply::Action(add_handler(store, timer)),
        Command::Start => ConsoleReply::Action(start_handler(store)),
        Command::Stop => ConsoleReply::Action(stop_handler(store)),
        Command::Status => ConsoleReply::Status(status_handler(store)),
        Command::Help => ConsoleReply::Help(HELP),
        Command::Quit => ConsoleReply::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_stop_then_start() {
        let store = TimerStore::new();

        let reply = add_handler(&store, Timer::new("Tea", 5.0));
        assert_eq!(reply.status, "running");
        assert_eq!(reply.state.timers, vec![Timer::new("Tea", 5.0)]);

        let reply = stop_handler(&store);
        assert_eq!(reply.status, "stopped");
        assert!(!store.is_running());

        let reply = start_handler(&store);
        assert_eq!(reply.status, "running");
        assert!(store.is_running());
    }

    #[test]
    fn test_status_report() {
        let store = TimerStore::new();
        let report = status_handler(&store);
        assert!(report.state.is_running);
        assert!(report.last_action.is_none());

        store.add_timer(Timer::new("Tea", 5.0));
        let report = status_handler(&store);
        assert_eq!(report.last_action.as_deref(), Some("ADD_TIMER"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["state"]["timers"][0]["name"], "Tea");
        assert_eq!(json["state"]["isRunning"], true);
    }

    #[test]
    fn test_handle_command_dispatch() {
        let store = TimerStore::new();
        assert!(matches!(handle_command(&store, Command::Stop), ConsoleReply::Action(_)));
        assert!(!store.is_running());
        assert!(matches!(handle_command(&store, Command::Status), ConsoleReply::Status(_)));
        assert!(matches!(handle_command(&store, Command::Help), ConsoleReply::Help(_)));
        assert!(matches!(handle_command(&store, Command::Quit), ConsoleReply::Quit));
    }
}
