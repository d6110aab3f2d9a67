//! Countdown ticker background task

use std::sync::Arc;
use tokio::{
    sync::watch,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::countdown::{Countdown, TICK_INTERVAL};

/// Drive one countdown while the store's running flag is set
///
/// Each run of the flag gets its own interval; stopping drops it and resuming
/// schedules a new one from the current value. The task ends once the countdown
/// reaches zero or the store goes away.
pub async fn countdown_ticker_task(
    name: String,
    countdown_tx: Arc<watch::Sender<Countdown>>,
    mut running_rx: watch::Receiver<bool>,
) {
    let mut countdown = *countdown_tx.borrow();
    if countdown.is_finished() {
        debug!("Countdown '{}' has nothing to count", name);
        return;
    }

    loop {
        // Wait for the running flag
        while !*running_rx.borrow_and_update() {
            if running_rx.changed().await.is_err() {
                debug!("Store dropped, ending countdown '{}'", name);
                return;
            }
        }

        debug!("Scheduling ticks for '{}' at {}ms", name, countdown.remaining_ms());
        let mut interval = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                changed = running_rx.changed() => {
                    if changed.is_err() {
                        debug!("Store dropped, ending countdown '{}'", name);
                        return;
                    }
                    if !*running_rx.borrow_and_update() {
                        debug!("Countdown '{}' paused at {}ms", name, countdown.remaining_ms());
                        break;
                    }
                }

                _ = interval.tick() => {
                    countdown.tick();
                    countdown_tx.send_replace(countdown);

                    if countdown.is_finished() {
                        info!("Countdown '{}' finished", name);
                        return;
                    }
                }
            }
        }
    }
}
