//! `coop-core` — foundational types for the `coop` nest-box simulator.
//!
//! This crate is a dependency of every other `coop-*` crate.  It intentionally
//! has no `coop-*` dependencies and a single external one (`rand`).
//!
//! # What lives here
//!
//! | Module   | Contents                                         |
//! |----------|--------------------------------------------------|
//! | [`ids`]  | `HenId`, `NestId`                                |
//! | [`time`] | `SimClock`, day-cycle constants and helpers      |
//! | [`rng`]  | `SimRng` — the run's single seeded random stream |

pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{HenId, NestId};
pub use rng::SimRng;
pub use time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SimClock, day_offset_secs};
