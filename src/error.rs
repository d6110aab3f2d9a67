//! Error types shared by the store, the CLI and the console

use thiserror::Error;

/// Errors raised when reaching for the shared timer store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The session context was used before a store was provided
    #[error("timers context is not initialized: provide a store before using it")]
    UninitializedContext,
}

/// Errors raised while parsing timers and console commands
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("timer name must not be empty")]
    EmptyName,

    #[error("expected NAME=SECONDS, got '{input}'")]
    MissingDuration { input: String },

    #[error("invalid duration '{value}': not a number")]
    InvalidDuration { value: String },

    #[error("duration must be a positive number of seconds, got {seconds}")]
    NonPositiveDuration { seconds: f64 },

    #[error("unknown command '{command}' (try 'help')")]
    UnknownCommand { command: String },
}
