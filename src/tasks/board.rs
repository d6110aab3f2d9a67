//! Board render background task

use std::io::{self, Write};
use tracing::{info, warn};

use crate::{state::TimerStore, view::Board};

/// Clear the terminal and move the cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Background task that redraws the board on every store change and every tick
pub async fn board_render_task(store: TimerStore, bar_width: usize) {
    info!("Starting board render task");

    let mut state_rx = store.subscribe();
    let mut board = Board::new(bar_width);

    loop {
        let snapshot = state_rx.borrow_and_update().clone();
        board.sync(&snapshot.timers, &store);

        if let Err(e) = draw(&board.render(snapshot.is_running)) {
            warn!("Failed to draw board: {}", e);
        }

        tokio::select! {
            changed = state_rx.changed() => {
                if changed.is_err() {
                    info!("Store closed, stopping board render task");
                    break;
                }
            }
            _ = board.changed() => {}
        }
    }
}

fn draw(screen: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}{}", CLEAR_SCREEN, screen)?;
    stdout.flush()
}
