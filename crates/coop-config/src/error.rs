use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("simulation duration must be positive, got {0} days")]
    Duration(f64),

    #[error("n_nests must be at least 1")]
    NoNests,

    #[error("nest_selection_weights length {got} does not match n_nests {expected}")]
    WeightCountMismatch { expected: usize, got: usize },

    #[error("hen population must be at least 1")]
    EmptyPopulation,

    #[error("no time windows configured")]
    NoWindows,

    #[error("time window `{0}` has no distributions entry")]
    MissingDistribution(String),

    #[error("distributions entry `{0}` has no time window")]
    MissingWindow(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
