//! Experiment runner: generate N mazes, solve each with both algorithms.

use lattice_core::Lattice;
use lattice_maze::{MazeGen, MazeInstance};
use lattice_paths::Searcher;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::{BenchConfig, BenchError, ExperimentReport, Trial};

/// Runs a validated [`BenchConfig`].
///
/// Mazes are always drawn sequentially from one seeded generator, so the
/// set of mazes depends only on the seed. With `parallel` set the solving
/// is spread over the rayon pool, each worker owning its own [`Searcher`];
/// the report is identical either way.
#[derive(Debug, Clone)]
pub struct ExperimentRunner {
    config: BenchConfig,
    lattice: Lattice,
}

impl ExperimentRunner {
    /// Validate `config`. Fails early on batches too small for a variance.
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        let lattice = config.validate()?;
        if config.repetitions < 2 {
            return Err(BenchError::InsufficientSamples {
                samples: config.repetitions,
            });
        }
        Ok(Self { config, lattice })
    }

    /// The configuration being run.
    #[inline]
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run the experiment.
    pub fn run(&self) -> Result<ExperimentReport, BenchError> {
        let seed = match self.config.seed {
            Some(seed) => seed,
            None => {
                let seed: u64 = rand::random();
                log::info!("no seed configured, drawing mazes with seed {seed}");
                seed
            }
        };
        let n = self.config.repetitions;
        log::info!(
            "solving {n} mazes on a {} lattice with {} barriers each (seed {seed})",
            self.lattice,
            self.config.maze.barrier_count
        );

        let generator = MazeGen::new(self.config.maze.clone(), ChaCha8Rng::seed_from_u64(seed))?;
        let mazes: Vec<MazeInstance> = generator.take(n).collect();

        let lattice = self.lattice;
        let trials: Vec<Trial> = if self.config.parallel {
            mazes
                .into_par_iter()
                .enumerate()
                .map_init(
                    || Searcher::for_lattice(&lattice),
                    |searcher, (i, maze)| Trial::run(i, maze, searcher),
                )
                .collect()
        } else {
            let mut searcher = Searcher::for_lattice(&lattice);
            mazes
                .into_iter()
                .enumerate()
                .map(|(i, maze)| Trial::run(i, maze, &mut searcher))
                .collect()
        };

        let report = ExperimentReport::from_trials(
            seed,
            self.config.time_divisor,
            trials,
            self.config.keep_trials,
        )?;
        log::info!(
            "done: UCS mean elapsed {:.4}, A* mean elapsed {:.4}, {} unreachable",
            report.ucs.elapsed.mean,
            report.astar.elapsed.mean,
            report.unreachable_count()
        );
        Ok(report)
    }
}
