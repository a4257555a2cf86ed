use coop_core::{HenId, NestId};
use thiserror::Error;

/// Bookkeeping violations. Any of these means the event stream feeding the
/// tracker is inconsistent, which is a bug upstream, not a recoverable
/// condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("unknown nest {0}")]
    UnknownNest(NestId),

    /// An entry for a hen that never left her previous nest.
    #[error("{hen} is already inside {nest}")]
    AlreadyPresent { hen: HenId, nest: NestId },

    /// An exit for a hen that is not inside the named nest.
    #[error("{hen} is not inside {nest}")]
    NotPresent { hen: HenId, nest: NestId },
}

pub type MetricsResult<T> = Result<T, MetricsError>;
