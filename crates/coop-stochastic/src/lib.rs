//! `coop-stochastic` — time windows and stochastic processes for the coop
//! nest-box simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`window`]    | [`WindowSpec`], [`TimeWindow`], [`DayCycle`]          |
//! | [`residence`] | [`ResidenceSpec`], [`ResidenceMixture`]               |
//! | [`arrival`]   | [`Arrival`], [`ArrivalGenerator`], [`HenSource`]      |
//! | [`error`]     | [`StochasticError`], [`StochasticResult`]             |
//!
//! # Day cycle model
//!
//! ```text
//! s        = t mod 86 400              (seconds since midnight)
//! window   = the unique segment with start <= s < end
//! boundary = absolute time that window ends (a wrapping window such as
//!            night 22:00–06:00 runs through midnight)
//! ```
//!
//! Arrivals form a Poisson process whose rate switches at window
//! boundaries; residence times come from a per-window gamma/uniform
//! mixture. Every draw goes through one explicitly threaded
//! [`coop_core::SimRng`], so runs with the same seed and parameters are
//! identical.

pub mod arrival;
pub mod error;
pub mod residence;
pub mod window;


pub use arrival::{Arrival, ArrivalGenerator, HenSource};
pub use error::{StochasticError, StochasticResult};
pub use residence::{ResidenceMixture, ResidenceSpec};
pub use window::{DayCycle, TimeWindow, WindowSpec};
