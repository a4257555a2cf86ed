//! Named time windows and the daily cycle.
//!
//! # Model
//!
//! The 24-hour day is partitioned into named windows (say night / day /
//! evening), each carrying its own Poisson arrival rate and residence
//! mixture. Windows are half-open `[start, end)` in hours-of-day and may
//! wrap midnight; a wrapping window is split into two segments internally
//! but still counts as one window when looking for its end.
//!
//! [`DayCycle::new`] validates the partition once. Gaps, overlaps, and bad
//! per-window parameters are construction errors, so [`DayCycle::resolve`]
//! itself is infallible and allocation-free.

use rand_distr::{Distribution, Exp};

use coop_core::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SimRng, day_offset_secs};

use crate::error::{StochasticError, StochasticResult};
use crate::residence::{ResidenceMixture, ResidenceSpec};

// ── Specs ────────────────────────────────────────────────────────────────────

/// Parameters for one named window, as supplied by configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowSpec {
    pub name: String,
    /// Start of the window in hours-of-day, `[0, 24]`.
    pub start_hour: f64,
    /// End of the window in hours-of-day, `[0, 24]`. `end < start` wraps
    /// midnight; `end == 0` means midnight itself.
    pub end_hour: f64,
    /// Poisson arrival rate in arrivals per hour. Zero marks the window
    /// dormant: no arrivals for its whole span.
    pub arrival_rate_per_hour: f64,
    pub residence: ResidenceSpec,
}

// ── TimeWindow ───────────────────────────────────────────────────────────────

/// A validated window with its distributions compiled and ready to sample.
#[derive(Clone, Debug)]
pub struct TimeWindow {
    pub name: String,
    /// Arrival rate converted to arrivals per second.
    pub rate_per_sec: f64,
    /// `None` for a dormant (zero-rate) window.
    interarrival: Option<Exp<f64>>,
    residence: ResidenceMixture,
}

impl TimeWindow {
    fn new(spec: &WindowSpec) -> StochasticResult<Self> {
        let rate = spec.arrival_rate_per_hour;
        if !rate.is_finite() || rate < 0.0 {
            return Err(StochasticError::Parameter {
                window: spec.name.clone(),
                reason: format!("arrival rate {rate} must be finite and >= 0"),
            });
        }
        let rate_per_sec = rate / SECONDS_PER_HOUR;
        let interarrival = if rate_per_sec > 0.0 {
            let exp = Exp::new(rate_per_sec).map_err(|e| StochasticError::Parameter {
                window: spec.name.clone(),
                reason: e.to_string(),
            })?;
            Some(exp)
        } else {
            None
        };
        Ok(Self {
            name: spec.name.clone(),
            rate_per_sec,
            interarrival,
            residence: ResidenceMixture::new(&spec.name, &spec.residence)?,
        })
    }

    /// Draw the next inter-arrival gap in seconds, or `None` if this window
    /// is dormant.
    ///
    /// # Panics
    ///
    /// Panics on a non-positive or non-finite draw, same policy as
    /// [`ResidenceMixture::sample`].
    pub fn sample_gap(&self, rng: &mut SimRng) -> Option<f64> {
        let exp = self.interarrival.as_ref()?;
        let gap = exp.sample(rng.inner());
        assert!(
            gap.is_finite() && gap > 0.0,
            "sampled non-positive arrival gap: {gap}"
        );
        Some(gap)
    }

    /// Draw a residence duration in seconds under this window's mixture.
    pub fn sample_residence(&self, rng: &mut SimRng) -> f64 {
        self.residence.sample(rng)
    }
}

// ── DayCycle ─────────────────────────────────────────────────────────────────

/// One within-day span owned by a window. Never wraps: `start < end`.
#[derive(Clone, Copy, Debug)]
struct Segment {
    /// Seconds-of-day, inclusive.
    start: f64,
    /// Seconds-of-day, exclusive.
    end: f64,
    window: usize,
}

/// The validated set of windows tiling the 24-hour day.
#[derive(Clone, Debug)]
pub struct DayCycle {
    windows: Vec<TimeWindow>,
    /// Sorted by `start`; covers `[0, 86400)` edge to edge.
    segments: Vec<Segment>,
}

impl DayCycle {
    /// Compile and validate window specs.
    ///
    /// Fails if the specs leave any second of the day uncovered, cover one
    /// twice, or carry out-of-domain distribution parameters.
    pub fn new(specs: &[WindowSpec]) -> StochasticResult<Self> {
        if specs.is_empty() {
            return Err(StochasticError::NoWindows);
        }

        let mut windows = Vec::with_capacity(specs.len());
        let mut segments: Vec<Segment> = Vec::with_capacity(specs.len() + 1);

        for (i, spec) in specs.iter().enumerate() {
            for hour in [spec.start_hour, spec.end_hour] {
                if !hour.is_finite() || !(0.0..=24.0).contains(&hour) {
                    return Err(StochasticError::Parameter {
                        window: spec.name.clone(),
                        reason: format!("hour {hour} outside [0, 24]"),
                    });
                }
            }
            let mut start = spec.start_hour * SECONDS_PER_HOUR;
            let mut end = spec.end_hour * SECONDS_PER_HOUR;
            if start >= SECONDS_PER_DAY {
                start = 0.0; // 24:00 is 00:00
            }
            if end == 0.0 {
                end = SECONDS_PER_DAY; // ends at midnight
            }
            if start == end {
                return Err(StochasticError::Parameter {
                    window: spec.name.clone(),
                    reason: "window has zero width (a full-day window is written 0..24)".into(),
                });
            }
            if start < end {
                segments.push(Segment { start, end, window: i });
            } else {
                // Wraps midnight: late piece plus early piece.
                segments.push(Segment { start, end: SECONDS_PER_DAY, window: i });
                segments.push(Segment { start: 0.0, end, window: i });
            }
            windows.push(TimeWindow::new(spec)?);
        }

        segments.sort_unstable_by(|a, b| a.start.total_cmp(&b.start));

        // The sorted segments must tile the day exactly. Edges are computed
        // from the same hour inputs, so equality here is exact, not fuzzy.
        let mut cursor = 0.0;
        for seg in &segments {
            if seg.start > cursor {
                return Err(StochasticError::WindowGap(cursor / SECONDS_PER_HOUR));
            }
            if seg.start < cursor {
                return Err(StochasticError::WindowOverlap(seg.start / SECONDS_PER_HOUR));
            }
            cursor = seg.end;
        }
        if cursor < SECONDS_PER_DAY {
            return Err(StochasticError::WindowGap(cursor / SECONDS_PER_HOUR));
        }

        Ok(Self { windows, segments })
    }

    /// The window in effect at absolute time `t` (seconds since run start).
    ///
    /// Pure in `t mod 86400`; O(log windows).
    pub fn resolve(&self, t: f64) -> &TimeWindow {
        let seg = self.segment_at(day_offset_secs(t));
        &self.windows[seg.window]
    }

    /// The absolute time at which the window containing `t` ends, always
    /// strictly greater than `t`.
    ///
    /// A window that wraps midnight ends where its early-morning piece does:
    /// for night 22:00–06:00, the boundary seen from 23:00 is 06:00 the next
    /// day, not midnight.
    pub fn next_boundary(&self, t: f64) -> f64 {
        let s = day_offset_secs(t);
        let seg = self.segment_at(s);
        let mut boundary = (t - s) + seg.end;
        if seg.end == SECONDS_PER_DAY && self.segments.len() > 1 {
            let first = &self.segments[0];
            if first.window == seg.window {
                boundary += first.end;
            }
        }
        boundary
    }

    /// All windows in spec order.
    pub fn windows(&self) -> &[TimeWindow] {
        &self.windows
    }

    fn segment_at(&self, s: f64) -> &Segment {
        // First segment starts at 0.0, so the partition point is >= 1 and
        // the segment before it contains s.
        let idx = self.segments.partition_point(|seg| seg.start <= s);
        &self.segments[idx - 1]
    }
}
