//! Nest occupancy accounting.
//!
//! # Accounting rule
//!
//! Totals accrue lazily. Each nest remembers when it last changed; on the
//! next change (or at finalize) the elapsed span is credited to every total
//! whose condition held across it:
//!
//! ```text
//! occupancy_time += elapsed   while the nest holds >= 1 hen
//! single_time    += elapsed   while the nest holds exactly 1 hen
//! ```
//!
//! Accrual always runs before the membership change takes effect, so a span
//! is credited under the state that actually held during it.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use coop_core::{HenId, NestId};

use crate::error::{MetricsError, MetricsResult};

/// Occupant-set change at one nest.
///
/// `before` and `after` are the full occupant lists around a single entry
/// or exit, in ascending hen order. Co-occurrence listeners reconstruct
/// episode starts and ends from these.
#[derive(Clone, Debug, PartialEq)]
pub struct NestTransition {
    pub nest: NestId,
    pub time: f64,
    pub before: Vec<HenId>,
    pub after: Vec<HenId>,
}

/// Per-nest totals, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OccupancyRecord {
    pub nest: NestId,
    /// Time with at least one hen inside.
    pub occupancy_time: f64,
    /// Time with exactly one hen inside.
    pub single_time: f64,
}

#[derive(Debug, Default)]
struct NestState {
    present: BTreeSet<HenId>,
    last_update: f64,
    occupancy_time: f64,
    single_time: f64,
}

impl NestState {
    fn accrue(&mut self, now: f64) {
        debug_assert!(now >= self.last_update, "occupancy accrual moved backwards");
        let elapsed = now - self.last_update;
        if !self.present.is_empty() {
            self.occupancy_time += elapsed;
        }
        if self.present.len() == 1 {
            self.single_time += elapsed;
        }
        self.last_update = now;
    }

    fn occupants(&self) -> Vec<HenId> {
        self.present.iter().copied().collect()
    }
}

/// Tracks who is inside which nest and for how long.
///
/// Feed it entries and exits in time order; each returns the
/// [`NestTransition`] it caused. Errors mean the event stream itself is
/// inconsistent (double entry, exit without entry, nest out of range).
#[derive(Debug)]
pub struct OccupancyTracker {
    nests: Vec<NestState>,
    /// Which nest each mid-visit hen sits in; absent means outside.
    whereabouts: FxHashMap<HenId, NestId>,
}

impl OccupancyTracker {
    pub fn new(nest_count: usize) -> Self {
        Self {
            nests: (0..nest_count).map(|_| NestState::default()).collect(),
            whereabouts: FxHashMap::default(),
        }
    }

    /// The nest `hen` currently sits in, if any.
    pub fn nest_of(&self, hen: HenId) -> Option<NestId> {
        self.whereabouts.get(&hen).copied()
    }

    pub fn nest_count(&self) -> usize {
        self.nests.len()
    }

    /// Record `hen` entering `nest` at `time`.
    pub fn record_entry(
        &mut self,
        time: f64,
        hen: HenId,
        nest: NestId,
    ) -> MetricsResult<NestTransition> {
        if let Some(&occupied) = self.whereabouts.get(&hen) {
            return Err(MetricsError::AlreadyPresent { hen, nest: occupied });
        }
        let state = self.nest_mut(nest)?;
        state.accrue(time);
        let before = state.occupants();
        state.present.insert(hen);
        let after = state.occupants();
        self.whereabouts.insert(hen, nest);
        Ok(NestTransition { nest, time, before, after })
    }

    /// Record `hen` leaving `nest` at `time`.
    pub fn record_exit(
        &mut self,
        time: f64,
        hen: HenId,
        nest: NestId,
    ) -> MetricsResult<NestTransition> {
        let state = self.nest_mut(nest)?;
        if !state.present.contains(&hen) {
            return Err(MetricsError::NotPresent { hen, nest });
        }
        state.accrue(time);
        let before = state.occupants();
        state.present.remove(&hen);
        let after = state.occupants();
        self.whereabouts.remove(&hen);
        Ok(NestTransition { nest, time, before, after })
    }

    /// Credit every nest's open span up to `time`. Hens still inside stay
    /// inside; call this once at the end of a run with the horizon so totals
    /// cover exactly the simulated span.
    pub fn finalize(&mut self, time: f64) {
        for state in &mut self.nests {
            state.accrue(time);
        }
    }

    /// Per-nest totals, in nest order.
    pub fn records(&self) -> Vec<OccupancyRecord> {
        self.nests
            .iter()
            .enumerate()
            .map(|(i, state)| OccupancyRecord {
                nest: NestId(i as u32),
                occupancy_time: state.occupancy_time,
                single_time: state.single_time,
            })
            .collect()
    }

    fn nest_mut(&mut self, nest: NestId) -> MetricsResult<&mut NestState> {
        let idx = nest.index();
        if idx >= self.nests.len() {
            return Err(MetricsError::UnknownNest(nest));
        }
        Ok(&mut self.nests[idx])
    }
}
