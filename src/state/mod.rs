//! State management module
//!
//! This module contains the timer value type, the state snapshot with its
//! reducer, the shared store and the session context that owns it.

pub mod context;
pub mod store;
pub mod timer;
pub mod timer_state;

// Re-export main types
pub use context::TimersContext;
pub use store::TimerStore;
pub use timer::Timer;
pub use timer_state::{Action, TimerState};
