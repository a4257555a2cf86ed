//! Residence-time mixture.
//!
//! How long a hen stays once she has settled into a nest box. Each time
//! window carries its own two-component mixture: with probability
//! `gamma_weight` the stay is gamma-distributed (long, right-skewed laying
//! visits), otherwise uniform between two bounds (short inspection visits).

use rand_distr::{Distribution, Gamma, Uniform};

use coop_core::SimRng;

use crate::error::{StochasticError, StochasticResult};

/// Mixture parameters as supplied by configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ResidenceSpec {
    /// Probability of drawing the gamma component, `[0, 1]`. 1.0 means
    /// always gamma, 0.0 always uniform.
    pub gamma_weight: f64,
    pub gamma_shape: f64,
    /// Gamma rate β; sampling uses scale `1/β`.
    pub gamma_rate: f64,
    /// Uniform component bounds in seconds, `0 < min < max`.
    pub uniform_min_secs: f64,
    pub uniform_max_secs: f64,
}

/// A validated mixture ready to sample.
#[derive(Clone, Debug)]
pub struct ResidenceMixture {
    gamma_weight: f64,
    gamma: Gamma<f64>,
    uniform: Uniform<f64>,
}

impl ResidenceMixture {
    /// Validate `spec` and compile its distributions. `window` names the
    /// owning time window in error messages.
    pub fn new(window: &str, spec: &ResidenceSpec) -> StochasticResult<Self> {
        let fail = |reason: String| StochasticError::Parameter {
            window: window.to_owned(),
            reason,
        };

        let p = spec.gamma_weight;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(fail(format!("gamma weight {p} outside [0, 1]")));
        }
        if !spec.gamma_shape.is_finite() || spec.gamma_shape <= 0.0 {
            return Err(fail(format!("gamma shape {} must be > 0", spec.gamma_shape)));
        }
        if !spec.gamma_rate.is_finite() || spec.gamma_rate <= 0.0 {
            return Err(fail(format!("gamma rate {} must be > 0", spec.gamma_rate)));
        }
        let (min, max) = (spec.uniform_min_secs, spec.uniform_max_secs);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min >= max {
            return Err(fail(format!("uniform bounds [{min}, {max}) need 0 < min < max")));
        }

        let gamma = Gamma::new(spec.gamma_shape, 1.0 / spec.gamma_rate)
            .map_err(|e| fail(e.to_string()))?;
        Ok(Self {
            gamma_weight: p,
            gamma,
            uniform: Uniform::new(min, max),
        })
    }

    /// Draw one residence duration in seconds.
    ///
    /// # Panics
    ///
    /// Panics if the draw comes out non-positive or non-finite. The
    /// parameters are validated at construction, so a bad draw means the
    /// distribution itself degenerated; aborting beats clamping a stay to a
    /// value the parameters never described.
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        let secs = if rng.gen_bool(self.gamma_weight) {
            self.gamma.sample(rng.inner())
        } else {
            self.uniform.sample(rng.inner())
        };
        assert!(
            secs.is_finite() && secs > 0.0,
            "sampled non-positive residence time: {secs}"
        );
        secs
    }
}
