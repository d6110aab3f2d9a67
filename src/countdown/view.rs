//! Countdown view: one mounted timer and the task ticking it

use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};
use tracing::debug;

use crate::{state::Timer, tasks::countdown_ticker_task, view::TimerFrame};
use super::Countdown;

/// A timer mounted on the board
///
/// Mounting seeds a fresh countdown from the timer's duration and spawns its
/// ticker. Dropping the view aborts the ticker, so no tick fires afterwards.
#[derive(Debug)]
pub struct CountdownView {
    timer: Timer,
    countdown_tx: Arc<watch::Sender<Countdown>>,
    countdown_rx: watch::Receiver<Countdown>,
    handle: JoinHandle<()>,
}

impl CountdownView {
    /// Mount `timer`, pacing it with the store's running flag
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(timer: Timer, running_rx: watch::Receiver<bool>) -> Self {
        let (countdown_tx, countdown_rx) = watch::channel(Countdown::from_timer(&timer));
        let countdown_tx = Arc::new(countdown_tx);

        debug!("Mounting countdown '{}'", timer.name);
        let handle = tokio::spawn(countdown_ticker_task(
            timer.name.clone(),
            Arc::clone(&countdown_tx),
            running_rx,
        ));

        Self {
            timer,
            countdown_tx,
            countdown_rx,
            handle,
        }
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Current countdown value
    pub fn countdown(&self) -> Countdown {
        *self.countdown_tx.borrow()
    }

    /// What the view currently shows
    pub fn frame(&self) -> TimerFrame {
        TimerFrame::new(&self.timer, &self.countdown())
    }

    /// Whether the ticker has ended (finished countdown or store gone)
    pub fn is_idle(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the next published tick
    pub async fn changed(&mut self) {
        // The view owns a sender, so the channel never closes under us
        let _ = self.countdown_rx.changed().await;
    }
}

impl Drop for CountdownView {
    fn drop(&mut self) {
        debug!("Unmounting countdown '{}'", self.timer.name);
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tokio::time::sleep;

    use super::*;
    use crate::state::TimerStore;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[tokio::test(start_paused = true)]
    async fn test_counts_down_while_running() {
        let store = TimerStore::new();
        let view = CountdownView::mount(Timer::new("Tea", 2.0), store.subscribe_running());
        assert_eq!(view.countdown().remaining_ms(), 2000);

        sleep(ms(275)).await;
        assert_eq!(view.countdown().remaining_ms(), 2000 - 5 * 50);

        sleep(ms(500)).await;
        assert_eq!(view.countdown().remaining_ms(), 2000 - 15 * 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_one_period() {
        let store = TimerStore::new();
        let view = CountdownView::mount(Timer::new("Tea", 1.0), store.subscribe_running());

        sleep(ms(25)).await;
        assert_eq!(view.countdown().remaining_ms(), 1000);
        sleep(ms(50)).await;
        assert_eq!(view.countdown().remaining_ms(), 950);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stays_put_while_stopped() {
        let store = TimerStore::new();
        store.stop_timer();
        let view = CountdownView::mount(Timer::new("Tea", 1.0), store.subscribe_running());

        sleep(ms(2000)).await;
        assert_eq!(view.countdown().remaining_ms(), 1000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_and_resume_keeps_value() {
        let store = TimerStore::new();
        let view = CountdownView::mount(Timer::new("Tea", 3.0), store.subscribe_running());

        sleep(ms(275)).await;
        store.stop_timer();
        sleep(ms(1000)).await;
        assert_eq!(view.countdown().remaining_ms(), 2750);

        store.start_timer();
        sleep(ms(275)).await;
        assert_eq!(view.countdown().remaining_ms(), 2500);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaches_zero_and_stops_ticking() {
        let store = TimerStore::new();
        let view = CountdownView::mount(Timer::new("Test", 5.0), store.subscribe_running());

        sleep(ms(5025)).await;
        let frame = view.frame();
        assert_eq!(frame.value, 0);
        assert_eq!(frame.max, 5000);
        assert_eq!(frame.text, "0.00");

        sleep(ms(10)).await;
        assert!(view.is_idle());

        // A later resume does not restart it
        store.stop_timer();
        store.start_timer();
        sleep(ms(500)).await;
        assert_eq!(view.countdown().remaining_ms(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_starts_from_full_duration() {
        let store = TimerStore::new();
        let timer = Timer::new("Tea", 1.0);

        let view = CountdownView::mount(timer.clone(), store.subscribe_running());
        sleep(ms(525)).await;
        assert_eq!(view.countdown().remaining_ms(), 500);
        drop(view);

        let view = CountdownView::mount(timer, store.subscribe_running());
        assert_eq!(view.countdown().remaining_ms(), 1000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_subscription() {
        let store = TimerStore::new();
        let view = CountdownView::mount(Timer::new("Tea", 60.0), store.subscribe_running());
        sleep(ms(75)).await;
        assert_eq!(store.running_subscribers(), 1);

        drop(view);
        sleep(ms(10)).await;
        assert_eq!(store.running_subscribers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_changed_resolves_on_tick() {
        let store = TimerStore::new();
        let mut view = CountdownView::mount(Timer::new("Tea", 1.0), store.subscribe_running());

        view.changed().await;
        assert_eq!(view.countdown().remaining_ms(), 950);
    }
}
