//! Fluent builder for constructing a [`Sim`].

use coop_core::{SimClock, SimRng};
use coop_metrics::{CoOccurrenceAccumulator, OccupancyTracker};
use coop_stochastic::{ArrivalGenerator, DayCycle, HenSource, WindowSpec};

use crate::event::Event;
use crate::queue::EventQueue;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - `duration_secs` — length of the simulated span
/// - `seed` — RNG seed; equal seed and parameters replay identically
/// - `.windows(v)` — the day partition as [`WindowSpec`]s
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                     |
/// |--------------------|-----------------------------|
/// | `.nest_weights(v)` | one nest, weight 1.0        |
/// | `.hen_source(s)`   | `Population { count: 100 }` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(7.0 * SECONDS_PER_DAY, 42)
///     .windows(specs)
///     .nest_weights(vec![1.0; 6])
///     .hen_source(HenSource::Population { count: 120 })
///     .build()?;
/// let summary = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    duration_secs: f64,
    seed:          u64,
    windows:       Vec<WindowSpec>,
    nest_weights:  Vec<f64>,
    hen_source:    HenSource,
}

impl SimBuilder {
    /// Create a builder for a run over `[0, duration_secs)` seeded with
    /// `seed`.
    pub fn new(duration_secs: f64, seed: u64) -> Self {
        Self {
            duration_secs,
            seed,
            windows:      Vec::new(),
            nest_weights: vec![1.0],
            hen_source:   HenSource::Population { count: 100 },
        }
    }

    /// Supply the day partition. Required; `build` fails without windows.
    pub fn windows(mut self, windows: Vec<WindowSpec>) -> Self {
        self.windows = windows;
        self
    }

    /// Relative selection weight per nest box. The length sets the nest
    /// count.
    pub fn nest_weights(mut self, weights: Vec<f64>) -> Self {
        self.nest_weights = weights;
        self
    }

    /// Where arrival hen ids come from.
    pub fn hen_source(mut self, source: HenSource) -> Self {
        self.hen_source = source;
        self
    }

    /// Validate inputs, compile the day cycle, and return a ready-to-run
    /// [`Sim`] with the first arrival already scheduled.
    pub fn build(self) -> SimResult<Sim> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(SimError::Duration(self.duration_secs));
        }

        let cycle = DayCycle::new(&self.windows)?;
        let mut arrivals =
            ArrivalGenerator::new(self.duration_secs, &self.nest_weights, self.hen_source)?;
        let mut rng = SimRng::new(self.seed);

        // ── Prime the event stream ────────────────────────────────────────
        let mut queue = EventQueue::new();
        if let Some(first) = arrivals.next_arrival(&cycle, &mut rng) {
            queue.push(Event::arrival(first.time, first.hen, first.nest));
        }

        Ok(Sim {
            clock:     SimClock::new(),
            horizon:   self.duration_secs,
            queue,
            cycle,
            arrivals,
            rng,
            occupancy: OccupancyTracker::new(self.nest_weights.len()),
            pairs:     CoOccurrenceAccumulator::new(),
        })
    }
}
