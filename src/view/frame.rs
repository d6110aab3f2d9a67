//! What a single timer shows

use serde::Serialize;

use crate::{countdown::Countdown, state::Timer};

/// Rendered state of one timer: its name, a bounded progress value and the
/// remaining seconds as text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerFrame {
    pub name: String,
    /// Progress bound, `duration * 1000`
    pub max: i64,
    /// Remaining milliseconds
    pub value: i64,
    /// Remaining seconds with two decimals
    pub text: String,
    #[serde(skip)]
    fraction: f64,
}

impl TimerFrame {
    pub fn new(timer: &Timer, countdown: &Countdown) -> Self {
        Self {
            name: timer.name.clone(),
            max: timer.duration_ms(),
            value: countdown.remaining_ms(),
            text: countdown.formatted(),
            fraction: countdown.fraction(),
        }
    }

    /// Fill share of the progress bar
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Name on one line, bar and remaining time on the next
    pub fn render(&self, bar_width: usize) -> String {
        let filled = ((self.fraction * bar_width as f64).round() as usize).min(bar_width);
        format!(
            "{}\n[{}{}] {}",
            self.name,
            "#".repeat(filled),
            "-".repeat(bar_width - filled),
            self.text,
        )
    }
}
