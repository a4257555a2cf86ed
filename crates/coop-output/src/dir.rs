//! Directory output backend.
//!
//! Creates three files in the configured output directory:
//! - `simulated_log.csv` — every entry and exit, in time order
//! - `occupancy_metrics.json` — per-nest time totals, keyed by nest id
//! - `co_occurrences.json` — episode counts keyed `"a,b"`

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::Writer;

use coop_metrics::PairKey;

use crate::row::{EventRow, OccupancyRow, pair_label};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes the run artifacts into one directory.
pub struct DirWriter {
    events: Writer<File>,
    occupancy_path: PathBuf,
    pairs_path: PathBuf,
    finished: bool,
}

impl DirWriter {
    /// Create `dir` if needed, open the visit log, and write its header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        let mut events = Writer::from_path(dir.join("simulated_log.csv"))?;
        events.write_record(["timestamp", "hen_id", "nest_id", "event_type"])?;

        Ok(Self {
            events,
            occupancy_path: dir.join("occupancy_metrics.json"),
            pairs_path: dir.join("co_occurrences.json"),
            finished: false,
        })
    }
}

impl OutputWriter for DirWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.timestamp.to_string(),
            row.hen_id.to_string(),
            row.nest_id.to_string(),
            row.event_type.to_string(),
        ])?;
        Ok(())
    }

    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()> {
        // Keyed by nest id; u32 keys come out as JSON object keys ("0", "1", …).
        let map: BTreeMap<u32, &OccupancyRow> =
            rows.iter().map(|row| (row.nest_id, row)).collect();
        let file = File::create(&self.occupancy_path)?;
        serde_json::to_writer_pretty(file, &map)?;
        Ok(())
    }

    fn write_pairs(&mut self, counts: &BTreeMap<PairKey, u64>) -> OutputResult<()> {
        let map: BTreeMap<String, u64> = counts
            .iter()
            .map(|(key, &count)| (pair_label(key), count))
            .collect();
        let file = File::create(&self.pairs_path)?;
        serde_json::to_writer_pretty(file, &map)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
