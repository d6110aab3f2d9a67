//! Console module
//!
//! This module contains the stdin command set, its handlers and the reply
//! structures printed back to the user.

pub mod commands;
pub mod handlers;
pub mod responses;

pub use commands::Command;
pub use handlers::{handle_command, ConsoleReply};
