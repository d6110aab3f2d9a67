//! Countdown Timers - A shared-store countdown timer board
//!
//! This is the main entry point for the countdown-timers application.

use tracing::{error, info};

use countdown_timers::{
    config::Config,
    state::{TimerStore, TimersContext},
    tasks::{board_render_task, console_input_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, stdout is the board
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timers={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting countdown-timers v{}", env!("CARGO_PKG_VERSION"));

    let mut context = TimersContext::new();
    context.provide(TimerStore::new());
    let store = context.store()?.clone();

    for timer in config.timers {
        store.add_timer(timer);
    }
    if config.paused {
        store.stop_timer();
    }
    info!("Configuration: {} timers, running={}", store.timers().len(), store.is_running());

    // Start the board render background task
    let board = tokio::spawn(board_render_task(store.clone(), config.bar_width));

    tokio::select! {
        _ = console_input_task(store.clone()) => {}
        result = shutdown_signal() => {
            if let Err(e) = result {
                error!("Failed to install signal handler: {}", e);
            } else {
                info!("Shutdown signal received");
            }
        }
    }

    // Unmounts every view, aborting their tickers
    board.abort();
    let _ = board.await;
    context.teardown();

    info!("Session ended");

    // The blocking stdin reader would otherwise hold the runtime open
    std::process::exit(0);
}
