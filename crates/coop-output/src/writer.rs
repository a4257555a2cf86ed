//! The `OutputWriter` trait implemented by backend writers.

use std::collections::BTreeMap;

use coop_metrics::PairKey;

use crate::row::{EventRow, OccupancyRow};
use crate::OutputResult;

/// Sink for the three run artifacts: the streaming visit log plus the two
/// end-of-run summaries.
///
/// Events stream in while the simulation runs; the summaries are written
/// once by the driver when the final state is known.
pub trait OutputWriter {
    /// Append one row to the visit log.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Write the per-nest occupancy totals.
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()>;

    /// Write the co-occurrence episode counts.
    fn write_pairs(&mut self, counts: &BTreeMap<PairKey, u64>) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
