//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous `f64` — seconds since simulation start.  Events carry
//! their own timestamps and the clock simply follows the event stream, so
//! there is no tick resolution to configure: two events 0.3 s apart are
//! processed 0.3 s apart.
//!
//! `SimClock` exists to enforce the one ordering rule everything else relies
//! on: simulated time never moves backwards.  The occupancy accounting adds
//! `(event_time − last_update_time)` slices on every event; feeding it an
//! out-of-order event would silently corrupt those sums, so `advance_to`
//! aborts instead.

use std::fmt;

pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds elapsed since the most recent midnight, in `[0, 86400)`.
///
/// The daily window cycle repeats forever, so every timestamp folds back
/// into day one.
#[inline]
pub fn day_offset_secs(t: f64) -> f64 {
    t.rem_euclid(SECONDS_PER_DAY)
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Monotonically non-decreasing simulation clock.
///
/// Cheap to copy; holds nothing but the current time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimClock {
    now: f64,
}

impl SimClock {
    /// A clock at t = 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in seconds since start.
    #[inline]
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Advance to `t`.
    ///
    /// # Panics
    /// Panics if `t` is earlier than the current time (or NaN).  Events come
    /// off a min-ordered queue, so this firing means the queue ordering or an
    /// event producer is broken — not a condition to paper over.
    #[inline]
    pub fn advance_to(&mut self, t: f64) {
        assert!(
            t >= self.now,
            "clock moved backwards: {t} < {now}",
            now = self.now
        );
        self.now = t;
    }

    /// Break the current time into (day, hour, minute) components.
    /// Useful for human-readable logging without a datetime library.
    pub fn elapsed_dhm(&self) -> (u64, u32, u32) {
        let total_secs = self.now.max(0.0) as u64;
        let days = total_secs / 86_400;
        let hours = ((total_secs % 86_400) / 3_600) as u32;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        (days, hours, minutes)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.elapsed_dhm();
        write!(f, "{:.1}s (day {} {:02}:{:02})", self.now, d, h, m)
    }
}
