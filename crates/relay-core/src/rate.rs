//! Telemetry submission-rate tracking.
//!
//! Holds the time of the last telemetry submission and turns the gap to the
//! next one into an instantaneous rate. The value is diagnostic only.

use crate::clock::Clock;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

/// Last-submission timestamp plus the rate derived from it.
#[derive(Debug)]
pub struct SubmissionRate {
    last_submission: Mutex<DateTime<Utc>>,
}

impl SubmissionRate {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            last_submission: Mutex::new(start),
        }
    }

    /// Record a submission happening now and return the rate in Hz.
    ///
    /// The clock is read while the lock is held, so concurrent callers
    /// update the timestamp in the same order they read it. Returns `None`
    /// when no time has elapsed (or the clock stepped backwards).
    pub async fn record(&self, clock: &dyn Clock) -> Option<f64> {
        let mut last = self.last_submission.lock().await;
        let now = clock.now();
        let rate = rate_hz(*last, now);
        *last = now;
        rate
    }

    pub async fn last_submission(&self) -> DateTime<Utc> {
        *self.last_submission.lock().await
    }
}

/// `1 / (now - last)` in Hz, or `None` for a zero or negative interval.
pub fn rate_hz(last: DateTime<Utc>, now: DateTime<Utc>) -> Option<f64> {
    let elapsed = (now - last).to_std().ok()?;
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        Some(1.0 / secs)
    } else {
        None
    }
}
