//! Plain data row types written by output backends.

use serde::{Deserialize, Serialize};

use coop_metrics::{OccupancyRecord, PairKey};
use coop_sim::{Event, EventKind};

/// One `simulated_log.csv` row: a single entry or exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    pub timestamp: f64,
    pub hen_id: u32,
    pub nest_id: u32,
    /// Written as `entry` / `exit`.
    pub event_type: EventKind,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            timestamp: event.time,
            hen_id: event.hen.0,
            nest_id: event.nest.0,
            event_type: event.kind,
        }
    }
}

/// One nest's entry in `occupancy_metrics.json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OccupancyRow {
    pub nest_id: u32,
    /// Seconds with at least one hen inside.
    pub total_occupancy_time: f64,
    /// Seconds with exactly one hen inside.
    pub total_single_hen_time: f64,
}

impl From<&OccupancyRecord> for OccupancyRow {
    fn from(record: &OccupancyRecord) -> Self {
        Self {
            nest_id: record.nest.0,
            total_occupancy_time: record.occupancy_time,
            total_single_hen_time: record.single_time,
        }
    }
}

/// `co_occurrences.json` key for a pair: `"a,b"`, smaller id first.
pub fn pair_label(key: &PairKey) -> String {
    format!("{},{}", key.a().0, key.b().0)
}

/// Parse an `"a,b"` pair label back into ids.
pub fn parse_pair_label(label: &str) -> Option<(u32, u32)> {
    let (a, b) = label.split_once(',')?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}
