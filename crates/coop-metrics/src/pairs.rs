//! Co-occurrence episode counting.
//!
//! # Episode rule
//!
//! A pair of hens shares an episode from the moment both are inside the
//! same nest until one of them leaves. An episode counts exactly once no
//! matter how long it lasts; the same two hens meeting again later is a new
//! episode and counts again.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use coop_core::HenId;

use crate::occupancy::NestTransition;

/// Unordered hen pair, stored smaller-id-first so `(a, b)` and `(b, a)` are
/// the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    a: HenId,
    b: HenId,
}

impl PairKey {
    pub fn new(x: HenId, y: HenId) -> Self {
        debug_assert_ne!(x, y, "a hen cannot pair with herself");
        if x <= y { Self { a: x, b: y } } else { Self { a: y, b: x } }
    }

    /// Smaller hen of the pair.
    pub fn a(&self) -> HenId {
        self.a
    }

    /// Larger hen of the pair.
    pub fn b(&self) -> HenId {
        self.b
    }
}

/// Counts shared-nest episodes per hen pair.
///
/// Feed it every [`NestTransition`] the occupancy tracker emits, in order.
#[derive(Debug, Default)]
pub struct CoOccurrenceAccumulator {
    /// Pairs currently mid-episode.
    active: FxHashSet<PairKey>,
    /// Episode totals. A `BTreeMap` so output ordering is stable run to run.
    counts: BTreeMap<PairKey, u64>,
}

impl CoOccurrenceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one occupant-set change into the episode ledger.
    pub fn observe(&mut self, transition: &NestTransition) {
        if transition.after.len() > transition.before.len() {
            // Someone entered: an episode starts with every hen already in.
            let entered = changed(&transition.after, &transition.before);
            for &other in &transition.before {
                let key = PairKey::new(entered, other);
                if self.active.insert(key) {
                    *self.counts.entry(key).or_insert(0) += 1;
                }
            }
        } else if transition.before.len() > transition.after.len() {
            // Someone left: her episodes with everyone remaining are over.
            let left = changed(&transition.before, &transition.after);
            for &other in &transition.after {
                self.active.remove(&PairKey::new(left, other));
            }
        }
    }

    /// Episode totals per pair so far.
    pub fn counts(&self) -> &BTreeMap<PairKey, u64> {
        &self.counts
    }

    /// Number of distinct pairs that ever shared a nest.
    pub fn pair_count(&self) -> usize {
        self.counts.len()
    }
}

/// The one hen present in `longer` but missing from `shorter`. Both lists
/// are sorted and differ by a single insertion.
fn changed(longer: &[HenId], shorter: &[HenId]) -> HenId {
    debug_assert_eq!(longer.len(), shorter.len() + 1);
    let mut i = 0;
    while i < shorter.len() && longer[i] == shorter[i] {
        i += 1;
    }
    longer[i]
}
