//! `coop-metrics` — occupancy accounting and co-occurrence episode counting
//! for the coop nest-box simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`occupancy`] | [`OccupancyTracker`], [`NestTransition`], totals       |
//! | [`pairs`]     | [`CoOccurrenceAccumulator`], [`PairKey`]               |
//! | [`error`]     | [`MetricsError`], [`MetricsResult`]                    |
//!
//! # Design
//!
//! The tracker is the single source of truth for who is inside which nest.
//! It accrues time totals incrementally (no end-of-run replay) and reports
//! every occupant-set change as a [`NestTransition`], which the pair
//! accumulator folds into episode counts. Both structures are pure
//! bookkeeping: no RNG, no clock, no I/O.

pub mod error;
pub mod occupancy;
pub mod pairs;


pub use error::{MetricsError, MetricsResult};
pub use occupancy::{NestTransition, OccupancyRecord, OccupancyTracker};
pub use pairs::{CoOccurrenceAccumulator, PairKey};
