//! `coop-config` — YAML run configuration for the coop nest-box simulator.
//!
//! # File shape
//!
//! ```yaml
//! simulation:
//!   duration_days: 7.0
//!   n_nests: 6
//!   nest_selection_weights: [1.0, 1.2, 0.8, 1.0, 1.5, 0.5]   # optional
//!   seed: 42
//!
//! hens:
//!   id_source: population     # population | minted
//!   population: 120
//!
//! time_windows:
//!   night:   { start: 22.0, end: 6.0 }
//!   day:     { start: 6.0,  end: 18.0 }
//!   evening: { start: 18.0, end: 22.0 }
//!
//! distributions:
//!   night:
//!     arrival_rate_per_hour: 0.5
//!     mixture_prob: 1.0
//!     gamma:   { shape: 2.0, rate: 0.002 }
//!     uniform: { min: 30.0, max: 300.0 }
//!   # ... one entry per window name
//! ```
//!
//! `time_windows` and `distributions` are keyed by the same window names;
//! loading cross-checks the two sections and [`Config::window_specs`] folds
//! them into the [`coop_stochastic::WindowSpec`]s the simulator compiles.
//! Units stay as written here (days, hours, per-hour rates, seconds); the
//! stochastic layer owns the conversions and the parameter domain checks.

pub mod error;
pub mod model;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigResult};
pub use model::{
    Config, DistributionSection, GammaSection, HensSection, IdSource, SimulationSection,
    UniformSection, WindowSection,
};
