use lattice_maze::MazeError;
use thiserror::Error;

/// Errors raised while configuring or running an experiment.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Maze(#[from] MazeError),

    /// Sample variance is undefined for fewer than two samples.
    #[error("variance needs at least 2 samples, got {samples}")]
    InsufficientSamples { samples: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
