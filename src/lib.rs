//! Countdown Timers - A shared-store countdown timer board
//!
//! Named timers are registered in a single store that also holds a global
//! running flag. Every mounted timer counts down on its own 50ms tick while the
//! flag is set, and renders as a draining progress bar.

pub mod config;
pub mod console;
pub mod countdown;
pub mod error;
pub mod state;
pub mod tasks;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use countdown::{Countdown, CountdownView};
pub use error::{ParseError, StoreError};
pub use state::{Action, Timer, TimerState, TimerStore, TimersContext};
pub use utils::signals::shutdown_signal;
