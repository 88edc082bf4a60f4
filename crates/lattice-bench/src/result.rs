//! Per-maze trials and the aggregated experiment report.

use lattice_maze::MazeInstance;
use lattice_paths::{Algorithm, SearchResult, Searcher};
use serde::{Deserialize, Serialize};

use crate::{BenchError, RunStatistics};

/// One maze solved by both algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Position of the maze in the generated sequence.
    pub index: usize,
    pub maze: MazeInstance,
    pub ucs: SearchResult,
    pub astar: SearchResult,
}

impl Trial {
    /// Solve `maze` with UCS and then A*, reusing `searcher`.
    pub fn run(index: usize, maze: MazeInstance, searcher: &mut Searcher) -> Self {
        let (start, goal) = (maze.start(), maze.goal());
        let ucs = searcher.ucs(&maze, start, goal);
        let astar = searcher.astar(&maze, start, goal);
        if ucs.path_len() != astar.path_len() {
            log::warn!(
                "trial {index}: UCS path of {} cells, A* path of {} cells",
                ucs.path_len(),
                astar.path_len()
            );
        }
        Self {
            index,
            maze,
            ucs,
            astar,
        }
    }

    /// The result produced by `algorithm`.
    #[inline]
    pub fn result(&self, algorithm: Algorithm) -> &SearchResult {
        match algorithm {
            Algorithm::UniformCost => &self.ucs,
            Algorithm::AStar => &self.astar,
        }
    }
}

/// Outcome of a whole experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Seed the mazes were drawn with.
    pub seed: u64,
    /// Number of mazes N.
    pub repetitions: usize,
    pub time_divisor: f64,
    /// Every trial in generation order; empty unless trials were kept.
    pub trials: Vec<Trial>,
    pub ucs: RunStatistics,
    pub astar: RunStatistics,
}

impl ExperimentReport {
    /// Summarise `trials` per algorithm.
    ///
    /// `trials` must hold at least two entries for the variance to exist.
    pub fn from_trials(
        seed: u64,
        time_divisor: f64,
        trials: Vec<Trial>,
        keep_trials: bool,
    ) -> Result<Self, BenchError> {
        let stats = |algorithm: Algorithm| {
            RunStatistics::from_results(
                algorithm,
                trials.iter().map(|t| t.result(algorithm)),
                time_divisor,
            )
        };
        let ucs = stats(Algorithm::UniformCost)?;
        let astar = stats(Algorithm::AStar)?;
        let repetitions = trials.len();
        Ok(Self {
            seed,
            repetitions,
            time_divisor,
            trials: if keep_trials { trials } else { Vec::new() },
            ucs,
            astar,
        })
    }

    /// Statistics of `algorithm`.
    #[inline]
    pub fn statistics(&self, algorithm: Algorithm) -> &RunStatistics {
        match algorithm {
            Algorithm::UniformCost => &self.ucs,
            Algorithm::AStar => &self.astar,
        }
    }

    /// Number of mazes whose goal was walled off.
    ///
    /// Both algorithms agree on reachability, so UCS is authoritative.
    #[inline]
    pub fn unreachable_count(&self) -> usize {
        self.ucs.unreachable
    }
}
