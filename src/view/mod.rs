//! Rendering module
//!
//! Turns mounted countdowns into text: one frame per timer and a board that
//! lays them out under a running/paused header.

pub mod board;
pub mod frame;

pub use board::Board;
pub use frame::TimerFrame;
