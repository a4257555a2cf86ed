use thiserror::Error;

/// Construction-time failures for windows, distributions, and arrivals.
///
/// All of these are configuration mistakes. Nothing here is recoverable at
/// run time: callers surface the error and stop.
#[derive(Debug, Error)]
pub enum StochasticError {
    #[error("no time windows configured")]
    NoWindows,

    /// The windows leave part of the day uncovered.
    #[error("time windows leave a gap starting at hour {0:.2}")]
    WindowGap(f64),

    /// Two windows claim the same part of the day.
    #[error("time windows overlap at hour {0:.2}")]
    WindowOverlap(f64),

    /// A per-window parameter is out of its domain.
    #[error("window `{window}`: {reason}")]
    Parameter { window: String, reason: String },

    #[error("nest selection weights: {0}")]
    NestWeights(String),

    #[error("hen population must be at least 1")]
    EmptyPopulation,
}

pub type StochasticResult<T> = Result<T, StochasticError>;
