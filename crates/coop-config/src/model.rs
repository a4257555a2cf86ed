//! Config file model and its conversions into simulator inputs.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use coop_core::SECONDS_PER_DAY;
use coop_stochastic::{HenSource, ResidenceSpec, WindowSpec};

use crate::error::{ConfigError, ConfigResult};

fn default_seed() -> u64 {
    0
}

fn default_population() -> u32 {
    100
}

fn default_mixture_prob() -> f64 {
    1.0
}

// ── Sections ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationSection {
    /// Simulated span in days; fractions are fine.
    pub duration_days: f64,
    pub n_nests: usize,
    /// Relative selection weight per nest. Omitted means every nest is
    /// equally likely.
    #[serde(default)]
    pub nest_selection_weights: Option<Vec<f64>>,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

/// Where arrival hen ids come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdSource {
    /// Draw each arrival uniformly from a fixed flock.
    #[default]
    Population,
    /// Mint a fresh id per arrival.
    Minted,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HensSection {
    #[serde(default)]
    pub id_source: IdSource,
    /// Flock size for `id_source: population`; ignored for `minted`.
    #[serde(default = "default_population")]
    pub population: u32,
}

impl Default for HensSection {
    fn default() -> Self {
        Self {
            id_source: IdSource::Population,
            population: default_population(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowSection {
    /// Start hour-of-day, `[0, 24]`.
    pub start: f64,
    /// End hour-of-day, `[0, 24]`. `end < start` wraps midnight.
    pub end: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GammaSection {
    pub shape: f64,
    /// Rate β; stays are sampled with scale `1/β`.
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UniformSection {
    /// Seconds.
    pub min: f64,
    /// Seconds.
    pub max: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DistributionSection {
    /// Poisson arrival rate while the window is in effect. Zero silences
    /// the window.
    pub arrival_rate_per_hour: f64,
    /// Probability a stay comes from the gamma component instead of the
    /// uniform one. Defaults to gamma-only.
    #[serde(default = "default_mixture_prob")]
    pub mixture_prob: f64,
    pub gamma: GammaSection,
    pub uniform: UniformSection,
}

// ── Config ────────────────────────────────────────────────────────────────────

/// One run's worth of configuration, as read from YAML.
///
/// `time_windows` and `distributions` are keyed by the same window names;
/// [`Config::load`] cross-checks the two sections. Distribution parameter
/// domains (rates, shapes, bounds) are validated downstream when the
/// specs are compiled.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub simulation: SimulationSection,
    #[serde(default)]
    pub hens: HensSection,
    pub time_windows: BTreeMap<String, WindowSection>,
    pub distributions: BTreeMap<String, DistributionSection>,
}

impl Config {
    /// Read, parse, and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    /// Parse and validate YAML text.
    pub fn from_yaml(raw: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        let sim = &self.simulation;
        if !sim.duration_days.is_finite() || sim.duration_days <= 0.0 {
            return Err(ConfigError::Duration(sim.duration_days));
        }
        if sim.n_nests == 0 {
            return Err(ConfigError::NoNests);
        }
        if let Some(weights) = &sim.nest_selection_weights {
            if weights.len() != sim.n_nests {
                return Err(ConfigError::WeightCountMismatch {
                    expected: sim.n_nests,
                    got: weights.len(),
                });
            }
        }
        if self.hens.id_source == IdSource::Population && self.hens.population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.time_windows.is_empty() {
            return Err(ConfigError::NoWindows);
        }
        for name in self.time_windows.keys() {
            if !self.distributions.contains_key(name) {
                return Err(ConfigError::MissingDistribution(name.clone()));
            }
        }
        for name in self.distributions.keys() {
            if !self.time_windows.contains_key(name) {
                return Err(ConfigError::MissingWindow(name.clone()));
            }
        }
        Ok(())
    }

    // ── Conversions into simulator inputs ─────────────────────────────────

    /// Simulated span in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.simulation.duration_days * SECONDS_PER_DAY
    }

    /// Per-nest selection weights; uniform when the file names none.
    pub fn nest_weights(&self) -> Vec<f64> {
        match &self.simulation.nest_selection_weights {
            Some(weights) => weights.clone(),
            None => vec![1.0; self.simulation.n_nests],
        }
    }

    pub fn hen_source(&self) -> HenSource {
        match self.hens.id_source {
            IdSource::Population => HenSource::Population { count: self.hens.population },
            IdSource::Minted => HenSource::Minted,
        }
    }

    /// Pair each window with its distribution parameters, in name order.
    pub fn window_specs(&self) -> ConfigResult<Vec<WindowSpec>> {
        self.time_windows
            .iter()
            .map(|(name, window)| {
                let dist = self
                    .distributions
                    .get(name)
                    .ok_or_else(|| ConfigError::MissingDistribution(name.clone()))?;
                Ok(WindowSpec {
                    name: name.clone(),
                    start_hour: window.start,
                    end_hour: window.end,
                    arrival_rate_per_hour: dist.arrival_rate_per_hour,
                    residence: ResidenceSpec {
                        gamma_weight: dist.mixture_prob,
                        gamma_shape: dist.gamma.shape,
                        gamma_rate: dist.gamma.rate,
                        uniform_min_secs: dist.uniform.min,
                        uniform_max_secs: dist.uniform.max,
                    },
                })
            })
            .collect()
    }
}
