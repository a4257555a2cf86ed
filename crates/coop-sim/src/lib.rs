//! `coop-sim` — discrete-event loop for the coop nest-box simulator.
//!
//! # Event loop
//!
//! ```text
//! while let Some(t) = queue.peek_time():
//!   t beyond horizon?  → discard the queue, stop (HorizonReached)
//!   pop event, advance clock to t
//!   Arrival   → pull the generator's next arrival (stream stays primed)
//!               hen mid-visit?  → count a skip, done
//!               otherwise       → sample residence, schedule the departure,
//!                                 record the entry, fold the transition
//!                                 into co-occurrence counts
//!   Departure → record the exit, fold the transition
//! queue drained → stop (QueueDrained)
//! finalize occupancy at the horizon
//! ```
//!
//! One arrival is scheduled at build time and each processed arrival
//! schedules its successor, so the queue never holds more than one future
//! arrival plus the pending departures.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use coop_core::SECONDS_PER_DAY;
//! use coop_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(7.0 * SECONDS_PER_DAY, 42)
//!     .windows(specs)
//!     .nest_weights(vec![1.0; 6])
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("{} events over 7 days", summary.events_processed());
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod queue;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{Event, EventKind};
pub use observer::{NoopObserver, SimObserver};
pub use queue::{EmptyQueue, EventQueue};
pub use sim::{RunSummary, Sim, StopReason};
