//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::Timer;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-timers")]
#[command(about = "A shared-store countdown timer board for the terminal")]
#[command(version)]
pub struct Config {
    /// Timer to register at startup, as NAME=SECONDS (repeatable)
    #[arg(short, long = "timer", value_name = "NAME=SECONDS")]
    pub timers: Vec<Timer>,

    /// Start with every timer paused
    #[arg(long)]
    pub paused: bool,

    /// Width of the progress bars in characters
    #[arg(long, default_value = "30")]
    pub bar_width: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
