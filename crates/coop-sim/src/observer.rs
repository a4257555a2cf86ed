//! Simulation observer trait for progress reporting and data collection.

use crate::event::Event;
use crate::sim::RunSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as the event loop
/// advances.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — event counter
///
/// ```rust,ignore
/// struct Counter { seen: u64 }
///
/// impl SimObserver for Counter {
///     fn on_event(&mut self, _event: &Event) {
///         self.seen += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each processed entry or exit, with simulation state
    /// already updated. Skipped arrivals (hen still mid-visit elsewhere)
    /// are not reported here; they show up in the run summary.
    fn on_event(&mut self, _event: &Event) {}

    /// Called once after the run stops, just before `run` returns.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing. Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
