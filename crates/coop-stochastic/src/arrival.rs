//! The hen arrival process.
//!
//! # Shape
//!
//! A lazy cursor over `[0, duration_secs)`. Each [`ArrivalGenerator::next_arrival`]
//! call walks forward from the previous arrival: resolve the window under
//! the cursor, draw an exponential gap, and either emit an arrival or, when
//! the gap would cross the window boundary, move the cursor to the boundary
//! and redraw under the new window's rate. The exponential is memoryless, so
//! discarding the partial gap at a boundary IS the non-homogeneous Poisson
//! process, not an approximation of it. Dormant windows are skipped in one
//! hop.
//!
//! Nothing is materialized up front: a month-long run costs the same memory
//! as an hour-long one.

use rand::distributions::{Distribution, WeightedIndex};

use coop_core::{HenId, NestId, SimRng};

use crate::error::{StochasticError, StochasticResult};
use crate::window::DayCycle;

/// Where arrival hen ids come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HenSource {
    /// Draw uniformly from a fixed flock `1..=count`; the same hen shows up
    /// again and again.
    Population { count: u32 },
    /// Mint a fresh id (1, 2, 3, ...) per arrival; every visit is a new hen.
    Minted,
}

/// One arrival produced by the generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrival {
    /// Seconds since run start.
    pub time: f64,
    pub hen: HenId,
    pub nest: NestId,
}

/// Pull-based arrival stream over `[0, duration_secs)`.
#[derive(Debug)]
pub struct ArrivalGenerator {
    duration_secs: f64,
    cursor: f64,
    nest_picker: WeightedIndex<f64>,
    hens: HenSource,
    /// Last id handed out by [`HenSource::Minted`].
    minted: u32,
}

impl ArrivalGenerator {
    /// Build a generator over `[0, duration_secs)`.
    ///
    /// `nest_weights[i]` is the selection weight of `NestId(i)`. Every
    /// weight must be finite and strictly positive: a zero weight is treated
    /// as a configuration mistake rather than a silently unreachable nest.
    pub fn new(
        duration_secs: f64,
        nest_weights: &[f64],
        hens: HenSource,
    ) -> StochasticResult<Self> {
        if nest_weights.is_empty() {
            return Err(StochasticError::NestWeights("no nests configured".into()));
        }
        if let Some(&w) = nest_weights.iter().find(|&&w| !w.is_finite() || w <= 0.0) {
            return Err(StochasticError::NestWeights(format!(
                "weight {w} must be finite and > 0"
            )));
        }
        let nest_picker =
            WeightedIndex::new(nest_weights).map_err(|e| StochasticError::NestWeights(e.to_string()))?;
        if let HenSource::Population { count } = hens {
            if count == 0 {
                return Err(StochasticError::EmptyPopulation);
            }
        }
        Ok(Self {
            duration_secs,
            cursor: 0.0,
            nest_picker,
            hens,
            minted: 0,
        })
    }

    /// Where the stream currently stands, in seconds since run start.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Produce the next arrival, or `None` once the cursor leaves the run.
    ///
    /// Gaps, the nest, and the hen are all drawn from `rng`, in that order,
    /// so a fixed seed fixes the whole stream.
    pub fn next_arrival(&mut self, cycle: &DayCycle, rng: &mut SimRng) -> Option<Arrival> {
        loop {
            if self.cursor >= self.duration_secs {
                return None;
            }
            let window = cycle.resolve(self.cursor);
            let boundary = cycle.next_boundary(self.cursor);

            let Some(gap) = window.sample_gap(rng) else {
                // Dormant window: hop straight past it.
                self.cursor = boundary;
                continue;
            };
            if self.cursor + gap >= boundary {
                // The gap crosses into the next window; redraw under its rate.
                self.cursor = boundary;
                continue;
            }

            self.cursor += gap;
            if self.cursor >= self.duration_secs {
                return None;
            }
            let nest = NestId(self.nest_picker.sample(rng.inner()) as u32);
            let hen = self.next_hen(rng);
            return Some(Arrival { time: self.cursor, hen, nest });
        }
    }

    fn next_hen(&mut self, rng: &mut SimRng) -> HenId {
        match self.hens {
            HenSource::Population { count } => HenId(rng.gen_range(1..=count)),
            HenSource::Minted => {
                self.minted += 1;
                HenId(self.minted)
            }
        }
    }
}
