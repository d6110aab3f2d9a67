//! Console input background task

use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use crate::{
    console::{handle_command, Command, ConsoleReply},
    state::TimerStore,
};

/// Read commands from stdin until `quit` or end of input
///
/// Replies go to stderr as JSON; stdout belongs to the board.
pub async fn console_input_task(store: TimerStore) {
    info!("Starting console input task");

    let mut lines = BufReader::new(io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("Console input closed");
                break;
            }
            Err(e) => {
                error!("Failed to read console input: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("Ignoring console input: {}", e);
                continue;
            }
        };

        match handle_command(&store, command) {
            ConsoleReply::Action(response) => print_json(&response),
            ConsoleReply::Status(report) => print_json(&report),
            ConsoleReply::Help(text) => eprintln!("{}", text),
            ConsoleReply::Quit => {
                info!("Quit requested");
                break;
            }
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => eprintln!("{}", json),
        Err(e) => error!("Failed to serialize console reply: {}", e),
    }
}
