use lattice_core::Cell;

use crate::traits::AstarPather;
use crate::{Algorithm, SearchResult, Searcher};

impl Searcher {
    /// A* search from `start` to `goal`.
    ///
    /// Same engine as [`ucs`](Self::ucs), with frontier priority
    /// `cost + pather.estimate(cell, goal)`. With an admissible, consistent
    /// estimate the path cost equals the one Uniform Cost Search finds,
    /// usually after finalizing fewer cells.
    pub fn astar<P: AstarPather>(&mut self, pather: &P, start: Cell, goal: Cell) -> SearchResult {
        self.best_first(Algorithm::AStar, pather, start, goal, |c| {
            pather.estimate(c, goal)
        })
    }
}
