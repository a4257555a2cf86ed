//! `coop-output` — run artifact writers and companion analytics for the
//! coop nest-box simulator.
//!
//! A finished run leaves three files in its output directory:
//!
//! | File                     | Contents                                   |
//! |--------------------------|--------------------------------------------|
//! | `simulated_log.csv`      | every entry/exit, in time order            |
//! | `occupancy_metrics.json` | per-nest time totals, keyed by nest id     |
//! | `co_occurrences.json`    | shared-nest episode counts, keyed `"a,b"`  |
//!
//! The backend implements [`OutputWriter`] and is driven two ways: the
//! visit log streams through [`SimOutputObserver`] while the sim runs, and
//! the two summaries are written by the driver once the final state is
//! known. [`analysis`] re-loads `co_occurrences.json` for the companion
//! reports.
//!
//! # Usage
//!
//! ```rust,ignore
//! use coop_output::{DirWriter, OutputWriter, SimOutputObserver};
//!
//! let writer = DirWriter::new(Path::new("./data"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let summary = sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     return Err(e.into());
//! }
//! let mut writer = obs.into_writer();
//! writer.write_occupancy(&rows)?;
//! writer.write_pairs(sim.pairs.counts())?;
//! writer.finish()?;
//! ```

pub mod analysis;
pub mod dir;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use dir::DirWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventRow, OccupancyRow, pair_label, parse_pair_label};
pub use writer::OutputWriter;
