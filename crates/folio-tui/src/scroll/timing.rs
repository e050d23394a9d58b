//! L4 Atomic Layer: Time calculation utilities for animations
//!
//! Pure functions over elapsed time, so callers can pass a fixed `now` in tests.

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) after `elapsed` of `duration`
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Progress of an animation started at `start`, observed at `now`
#[inline]
pub fn progress_at(start: Instant, now: Instant, duration: Duration) -> f64 {
    progress(now.saturating_duration_since(start), duration)
}

#[inline]
pub fn is_complete_at(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for row positions
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t).round() as u16
}
