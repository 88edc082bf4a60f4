//! Experiment configuration, loadable from TOML.

use std::path::Path;

use lattice_core::Lattice;
use lattice_maze::MazeConfig;
use serde::{Deserialize, Serialize};

use crate::BenchError;

/// Visited cells per unit of the elapsed-time stand-in.
pub const DEFAULT_TIME_DIVISOR: f64 = 1000.0;

/// Parameters of one experiment.
///
/// Every field has a default, so a TOML file only needs the keys it
/// changes. The maze parameters live in a nested `[maze]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Grid size, barrier count and start/goal regions.
    pub maze: MazeConfig,
    /// Number of mazes N. Must be at least 2 for the variance.
    pub repetitions: usize,
    /// Seed for the maze generator. A random seed is drawn (and logged)
    /// when absent.
    pub seed: Option<u64>,
    /// Divisor turning visited-cell counts into the elapsed-time metric.
    pub time_divisor: f64,
    /// Solve the mazes on the rayon thread pool.
    pub parallel: bool,
    /// Keep every trial in the report, not just the statistics.
    pub keep_trials: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            maze: MazeConfig::default(),
            repetitions: 100,
            seed: None,
            time_divisor: DEFAULT_TIME_DIVISOR,
            parallel: false,
            keep_trials: true,
        }
    }
}

impl BenchConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, BenchError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Set the maze parameters (builder).
    pub fn with_maze(mut self, maze: MazeConfig) -> Self {
        self.maze = maze;
        self
    }

    /// Set the number of mazes (builder).
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Fix the generator seed (builder).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Toggle parallel solving (builder).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the configuration and return the lattice of its mazes.
    pub fn validate(&self) -> Result<Lattice, BenchError> {
        let lattice = self.maze.validate()?;
        if !(self.time_divisor.is_finite() && self.time_divisor > 0.0) {
            return Err(BenchError::InvalidConfiguration(format!(
                "time_divisor must be a positive number, got {}",
                self.time_divisor
            )));
        }
        Ok(lattice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_maze::MazeError;

    #[test]
    fn empty_toml_is_default() {
        let c = BenchConfig::from_toml_str("").unwrap();
        assert_eq!(c, BenchConfig::default());
        assert_eq!(c.maze, MazeConfig::default());
    }

    #[test]
    fn full_toml() {
        let c = BenchConfig::from_toml_str(
            r#"
            repetitions = 12
            seed = 99
            time_divisor = 10.0
            parallel = true
            keep_trials = false

            [maze]
            cols = 10
            rows = 7
            barrier_count = 9
            start_region = { start = 0, end = 5 }
            goal_region = { start = 60, end = 70 }
            "#,
        )
        .unwrap();
        assert_eq!(c.repetitions, 12);
        assert_eq!(c.seed, Some(99));
        assert_eq!(c.time_divisor, 10.0);
        assert!(c.parallel);
        assert!(!c.keep_trials);
        assert_eq!(
            c.maze,
            MazeConfig::with_size(10, 7, 9)
                .with_start_region(0..5)
                .with_goal_region(60..70)
        );
        assert!(c.validate().is_ok());
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = BenchConfig::from_toml_str("repetitions = \"many\"").unwrap_err();
        assert!(matches!(err, BenchError::Toml(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = BenchConfig::load("/nonexistent/lattice-bench.toml").unwrap_err();
        assert!(matches!(err, BenchError::Io(_)));
    }

    #[test]
    fn validation() {
        let c = BenchConfig::default().with_maze(MazeConfig::with_size(6, 6, 40));
        assert!(matches!(
            c.validate(),
            Err(BenchError::Maze(MazeError::TooManyBarriers { .. }))
        ));

        let mut c = BenchConfig::default();
        c.time_divisor = 0.0;
        assert!(matches!(
            c.validate(),
            Err(BenchError::InvalidConfiguration(_))
        ));
    }
}
