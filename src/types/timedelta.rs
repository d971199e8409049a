//! Elapsed query time.

use std::ops::Add;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Elapsed execution time of a query.
///
/// Serialized as floating-point seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct TimeDelta(Duration);

impl TimeDelta {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn from_micros(micros: u64) -> Self {
        Self(Duration::from_micros(micros))
    }

    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    /// Short human-friendly rendering, e.g. "850µs", "12ms" or "1.50s".
    pub fn humanize(&self) -> String {
        if self.0 < Duration::from_millis(1) {
            format!("{}µs", self.0.as_micros())
        } else if self.0 < Duration::from_secs(1) {
            format!("{}ms", self.0.as_millis())
        } else {
            format!("{:.2}s", self.0.as_secs_f64())
        }
    }
}

impl From<Duration> for TimeDelta {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl From<f64> for TimeDelta {
    fn from(seconds: f64) -> Self {
        // Negative and non-finite values collapse to zero
        if !seconds.is_finite() || seconds <= 0.0 {
            return Self::default();
        }
        Self(Duration::from_nanos((seconds * 1e9).round() as u64))
    }
}

impl From<TimeDelta> for f64 {
    fn from(delta: TimeDelta) -> Self {
        delta.0.as_secs_f64()
    }
}

impl Add for TimeDelta {
    type Output = TimeDelta;

    fn add(self, rhs: TimeDelta) -> TimeDelta {
        TimeDelta(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for TimeDelta {
    fn sum<I: Iterator<Item = TimeDelta>>(iter: I) -> Self {
        iter.fold(TimeDelta::default(), Add::add)
    }
}
