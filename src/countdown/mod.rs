//! Countdown module
//!
//! The countdown value each mounted timer owns, and the view that mounts a
//! timer and keeps its countdown ticking.

pub mod model;
pub mod view;

pub use model::{Countdown, TICK_INTERVAL, TICK_MS};
pub use view::CountdownView;
