//! Background tasks module
//!
//! This module contains the tasks that run for the lifetime of a session.

pub mod board;
pub mod console_input;
pub mod countdown_ticker;

// Re-export main functions
pub use board::board_render_task;
pub use console_input::console_input_task;
pub use countdown_ticker::countdown_ticker_task;
