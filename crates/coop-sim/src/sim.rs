//! The `Sim` struct and its event loop.

use std::fmt;

use coop_core::{SimClock, SimRng};
use coop_metrics::{CoOccurrenceAccumulator, OccupancyTracker};
use coop_stochastic::{ArrivalGenerator, DayCycle};

use crate::event::{Event, EventKind};
use crate::queue::EventQueue;
use crate::{SimObserver, SimResult};

// ── Run summary ───────────────────────────────────────────────────────────────

/// Why a run stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StopReason {
    /// Every scheduled event was processed before the horizon.
    #[default]
    QueueDrained,
    /// The earliest pending event lay beyond the horizon; it and everything
    /// after it were discarded unprocessed.
    HorizonReached,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::QueueDrained => write!(f, "queue drained"),
            StopReason::HorizonReached => write!(f, "horizon reached"),
        }
    }
}

/// What happened over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Entries actually recorded.
    pub arrivals: u64,
    /// Exits actually recorded.
    pub departures: u64,
    /// Arrivals dropped because the hen was still mid-visit.
    pub skipped_arrivals: u64,
    /// Events still queued when the horizon cut the run short.
    pub discarded_events: u64,
    /// Time of the last processed event, in seconds since run start.
    pub last_event_time: f64,
    pub stop: StopReason,
}

impl RunSummary {
    /// Total events popped from the queue, skips included.
    pub fn events_processed(&self) -> u64 {
        self.arrivals + self.departures + self.skipped_arrivals
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` holds all run state and drives the discrete-event loop:
///
/// 1. **Peek**: an empty queue ends the run; an earliest event beyond the
///    horizon discards the rest of the queue and ends the run.
/// 2. **Pop** the earliest event and advance the clock to it.
/// 3. **Arrival**: pull the generator's next arrival first (the stream stays
///    primed), then either skip the event (hen still mid-visit) or sample a
///    residence time, schedule the matching departure, and record the entry.
/// 4. **Departure**: record the exit.
///
/// Every recorded entry or exit yields an occupant-set transition that is
/// folded into the co-occurrence counts on the spot. After the loop the
/// occupancy tracker is closed out at the horizon so time totals cover
/// exactly the simulated span.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// Current simulation time. Advances monotonically, event to event.
    pub clock: SimClock,

    /// End of the simulated span, in seconds. Events strictly beyond it are
    /// discarded unprocessed.
    pub horizon: f64,

    /// Pending events, ordered by (time, insertion order).
    pub queue: EventQueue,

    /// The validated day partition with its per-window distributions.
    pub cycle: DayCycle,

    /// Lazy arrival stream over `[0, horizon)`.
    pub arrivals: ArrivalGenerator,

    /// The run's single RNG stream. Every draw flows through here, so one
    /// seed fixes the whole run.
    pub rng: SimRng,

    /// Who is inside which nest, plus per-nest time totals.
    pub occupancy: OccupancyTracker,

    /// Shared-nest episode counts per hen pair.
    pub pairs: CoOccurrenceAccumulator,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the event loop until the queue drains or the horizon cuts it off.
    ///
    /// Calls observer hooks as events apply. Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        let mut summary = RunSummary::default();

        loop {
            // ── Peek: decide whether the run is over ──────────────────────
            match self.queue.peek_time() {
                None => {
                    summary.stop = StopReason::QueueDrained;
                    break;
                }
                Some(t) if t > self.horizon => {
                    summary.discarded_events = self.queue.len() as u64;
                    self.queue.clear();
                    summary.stop = StopReason::HorizonReached;
                    break;
                }
                Some(_) => {}
            }

            let event = self.queue.pop_next()?;
            self.clock.advance_to(event.time);
            match event.kind {
                EventKind::Arrival => self.handle_arrival(event, &mut summary, observer)?,
                EventKind::Departure => self.handle_departure(event, &mut summary, observer)?,
            }
        }

        // Close out open visits so totals cover exactly [0, horizon].
        self.occupancy.finalize(self.horizon);
        summary.last_event_time = self.clock.now();
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    // ── Event handlers ────────────────────────────────────────────────────

    fn handle_arrival<O: SimObserver>(
        &mut self,
        event: Event,
        summary: &mut RunSummary,
        observer: &mut O,
    ) -> SimResult<()> {
        // Pull the successor before anything can early-return, so the
        // arrival stream never stalls.
        self.schedule_next_arrival();

        if self.occupancy.nest_of(event.hen).is_some() {
            // Still sitting somewhere; this arrival never happens. No
            // residence is drawn for it either.
            summary.skipped_arrivals += 1;
            return Ok(());
        }

        let residence = self.cycle.resolve(event.time).sample_residence(&mut self.rng);
        self.queue
            .push(Event::departure(event.time + residence, event.hen, event.nest));

        let transition = self.occupancy.record_entry(event.time, event.hen, event.nest)?;
        self.pairs.observe(&transition);
        summary.arrivals += 1;
        observer.on_event(&event);
        Ok(())
    }

    fn handle_departure<O: SimObserver>(
        &mut self,
        event: Event,
        summary: &mut RunSummary,
        observer: &mut O,
    ) -> SimResult<()> {
        let transition = self.occupancy.record_exit(event.time, event.hen, event.nest)?;
        self.pairs.observe(&transition);
        summary.departures += 1;
        observer.on_event(&event);
        Ok(())
    }

    fn schedule_next_arrival(&mut self) {
        if let Some(arrival) = self.arrivals.next_arrival(&self.cycle, &mut self.rng) {
            self.queue
                .push(Event::arrival(arrival.time, arrival.hen, arrival.nest));
        }
    }
}
