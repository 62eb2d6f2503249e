//! Time calculation utilities for panel animations
//!
//! All functions take the current instant explicitly so frame drivers can be
//! replayed deterministically.

use std::time::{Duration, Instant};

/// Time elapsed between `start` and `now` (zero if `now` precedes `start`)
#[inline]
pub fn elapsed(start: Instant, now: Instant) -> Duration {
    now.saturating_duration_since(start)
}

/// Check if animation is complete at `now`
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    elapsed(start, now) >= duration
}

/// Duration in fractional milliseconds, the unit the easing tween works in
#[inline]
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}
