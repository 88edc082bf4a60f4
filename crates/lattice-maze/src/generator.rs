//! Random maze generation.
//!
//! A maze is drawn in three steps:
//! 1. `start` uniformly from the start region,
//! 2. `goal` uniformly from the goal region,
//! 3. `barrier_count` barriers without replacement from every other cell.

use std::collections::BTreeSet;
use std::ops::Range;

use lattice_core::{Cell, Lattice};
use rand::Rng;
use rand::seq::index;

use crate::{MazeConfig, MazeError, MazeInstance};

/// Maze generator drawing from an injected random source.
///
/// The configuration is validated once in [`MazeGen::new`]; after that
/// [`generate`](MazeGen::generate) cannot fail. Seeding `rng` makes the
/// sequence of mazes reproducible.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    config: MazeConfig,
    lattice: Lattice,
    start_span: Range<usize>,
    goal_span: Range<usize>,
    // cells eligible for barriers, refilled per maze
    free: Vec<Cell>,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator, rejecting invalid configurations up front.
    pub fn new(config: MazeConfig, rng: R) -> Result<Self, MazeError> {
        let lattice = config.validate()?;
        let start_span = config.start_span(&lattice);
        let goal_span = config.goal_span(&lattice);
        Ok(Self {
            rng,
            free: Vec::with_capacity(lattice.len()),
            config,
            lattice,
            start_span,
            goal_span,
        })
    }

    /// The grid every generated maze lives on.
    #[inline]
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// The validated configuration.
    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Draw one maze.
    pub fn generate(&mut self) -> MazeInstance {
        let start = Cell(self.rng.random_range(self.start_span.clone()));
        let goal = Cell(self.rng.random_range(self.goal_span.clone()));

        self.free.clear();
        self.free
            .extend(self.lattice.cells().filter(|&c| c != start && c != goal));

        let picks = index::sample(&mut self.rng, self.free.len(), self.config.barrier_count);
        let barriers: BTreeSet<Cell> = picks.into_iter().map(|i| self.free[i]).collect();

        log::debug!(
            "maze {}: start {start}, goal {goal}, barriers {:?}",
            self.lattice,
            barriers.iter().map(|c| c.index()).collect::<Vec<_>>()
        );
        MazeInstance::from_parts(self.lattice, start, goal, barriers)
    }
}

impl<R: Rng> Iterator for MazeGen<R> {
    type Item = MazeInstance;

    /// Endless stream of mazes; never returns `None`.
    fn next(&mut self) -> Option<MazeInstance> {
        Some(self.generate())
    }
}

/// Validate `config` and draw a single maze from `rng`.
pub fn generate_maze<R: Rng + ?Sized>(
    config: &MazeConfig,
    rng: &mut R,
) -> Result<MazeInstance, MazeError> {
    Ok(MazeGen::new(config.clone(), rng)?.generate())
}
