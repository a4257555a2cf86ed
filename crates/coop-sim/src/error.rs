use coop_metrics::MetricsError;
use coop_stochastic::StochasticError;
use thiserror::Error;

use crate::queue::EmptyQueue;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("non-positive simulation duration: {0}")]
    Duration(f64),

    #[error("simulation setup error: {0}")]
    Stochastic(#[from] StochasticError),

    /// The event stream contradicted itself mid-run. A bug, not bad input.
    #[error("event bookkeeping failed: {0}")]
    Metrics(#[from] MetricsError),

    #[error("event queue error: {0}")]
    Queue(#[from] EmptyQueue),
}

pub type SimResult<T> = Result<T, SimError>;
