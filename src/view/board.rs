//! Board of mounted countdown views

use std::future::pending;
use futures::future::select_all;
use tracing::debug;

use crate::{
    countdown::CountdownView,
    state::{Timer, TimerStore},
};

/// Every timer of the store, mounted as a countdown view
#[derive(Debug)]
pub struct Board {
    views: Vec<CountdownView>,
    bar_width: usize,
}

impl Board {
    pub fn new(bar_width: usize) -> Self {
        Self {
            views: Vec::new(),
            bar_width,
        }
    }

    /// Mount views for timers appended since the last sync
    ///
    /// The store's timer list only grows, so views line up with it by index.
    pub fn sync(&mut self, timers: &[Timer], store: &TimerStore) {
        for timer in timers.iter().skip(self.views.len()) {
            debug!("Board mounting '{}'", timer.name);
            self.views.push(CountdownView::mount(timer.clone(), store.subscribe_running()));
        }
    }

    pub fn views(&self) -> &[CountdownView] {
        &self.views
    }

    /// Header line followed by every timer's frame
    pub fn render(&self, is_running: bool) -> String {
        let mut out = format!("Timers ({})\n", if is_running { "running" } else { "paused" });

        if self.views.is_empty() {
            out.push_str("\nNo timers yet. Type 'add NAME=SECONDS'.\n");
        }
        for view in &self.views {
            out.push('\n');
            out.push_str(&view.frame().render(self.bar_width));
            out.push('\n');
        }
        out
    }

    /// Resolve when any countdown publishes a tick
    pub async fn changed(&mut self) {
        if self.views.is_empty() {
            return pending().await;
        }
        let ticks = self.views.iter_mut().map(|view| Box::pin(view.changed()));
        select_all(ticks).await;
    }
}
