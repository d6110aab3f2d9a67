//! Timer value object

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A named countdown configuration
///
/// The store accepts any `Timer` as-is; constraint checks live in
/// [`FromStr`], which is what the CLI and the console go through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    /// Display label, not required to be unique
    pub name: String,
    /// Countdown length in seconds
    pub duration: f64,
}

impl Timer {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }

    /// Duration in whole milliseconds
    pub fn duration_ms(&self) -> i64 {
        (self.duration * 1000.0).round() as i64
    }
}

impl FromStr for Timer {
    type Err = ParseError;

    /// Parse `NAME=SECONDS`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, seconds) = s.rsplit_once('=').ok_or_else(|| ParseError::MissingDuration {
            input: s.to_string(),
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyName);
        }

        let seconds = seconds.trim();
        let duration: f64 = seconds.parse().map_err(|_| ParseError::InvalidDuration {
            value: seconds.to_string(),
        })?;
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ParseError::NonPositiveDuration { seconds: duration });
        }

        Ok(Self::new(name, duration))
    }
}
