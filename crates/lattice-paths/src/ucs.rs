use lattice_core::Cell;

use crate::traits::WeightedPather;
use crate::{Algorithm, SearchResult, Searcher};

impl Searcher {
    /// Uniform Cost Search from `start` to `goal`.
    ///
    /// Cells are finalized in order of accumulated edge cost, ties going to
    /// the lower cell id. The search stops as soon as `goal` is finalized.
    /// The returned path is empty if `goal` cannot be reached, in which case
    /// `visited` holds every cell reachable from `start`.
    pub fn ucs<P: WeightedPather>(&mut self, pather: &P, start: Cell, goal: Cell) -> SearchResult {
        self.best_first(Algorithm::UniformCost, pather, start, goal, |_| 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestMaze;

    fn cells(ids: &[usize]) -> Vec<Cell> {
        ids.iter().copied().map(Cell).collect()
    }

    #[test]
    fn open_grid_takes_the_diagonal() {
        let maze = TestMaze::new(6, 6, &[]);
        let mut s = Searcher::for_lattice(&maze.lattice);
        let r = s.ucs(&maze, Cell(0), Cell(35));
        assert_eq!(r.algorithm, Algorithm::UniformCost);
        assert_eq!(r.path, cells(&[0, 7, 14, 21, 28, 35]));
        assert!((r.cost().unwrap() - 5.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
        // Every cell is cheaper than the far corner, so all get finalized.
        assert_eq!(r.visited_count(), 36);
        assert_eq!(&r.visited[..8], &cells(&[0, 1, 6, 7, 2, 12, 8, 13])[..]);
    }

    #[test]
    fn routes_around_central_block() {
        let maze = TestMaze::new(6, 6, &[14, 15, 20, 21]);
        let mut s = Searcher::new(36);
        let r = s.ucs(&maze, Cell(0), Cell(35));
        assert_eq!(r.path, cells(&[0, 1, 2, 9, 16, 22, 29, 35]));
        let expected = 4.0 + 3.0 * std::f64::consts::SQRT_2;
        assert!((r.cost().unwrap() - expected).abs() < 1e-9);
        assert!((maze.path_cost(&r.path) - expected).abs() < 1e-9);
        assert_eq!(r.visited_count(), 32);
        assert_eq!(r.visited.first(), Some(&Cell(0)));
        assert_eq!(r.visited.last(), Some(&Cell(35)));
    }

    #[test]
    fn walled_off_goal_visits_reachable_component() {
        // Column x = 2 is solid wall.
        let maze = TestMaze::new(6, 6, &[2, 8, 14, 20, 26, 32]);
        let mut s = Searcher::new(36);
        let r = s.ucs(&maze, Cell(0), Cell(35));
        assert!(r.path.is_empty());
        assert_eq!(r.cost(), None);
        assert_eq!(
            r.visited,
            cells(&[0, 1, 6, 7, 12, 13, 18, 19, 24, 25, 30, 31])
        );
    }

    #[test]
    fn corridor_detour() {
        // 5x3, middle row blocked except its last cell.
        let maze = TestMaze::new(5, 3, &[5, 6, 7, 8]);
        let mut s = Searcher::new(15);
        let r = s.ucs(&maze, Cell(0), Cell(14));
        assert_eq!(r.path, cells(&[0, 1, 2, 3, 9, 14]));
        assert_eq!(r.visited, cells(&[0, 1, 2, 3, 4, 9, 14]));
        assert!((r.cost().unwrap() - (4.0 + std::f64::consts::SQRT_2)).abs() < 1e-9);
    }

    #[test]
    fn visited_never_contains_barriers_or_duplicates() {
        let barriers = [3, 9, 10, 16, 22, 27];
        let maze = TestMaze::new(6, 6, &barriers);
        let r = Searcher::new(36).ucs(&maze, Cell(1), Cell(34));
        let mut sorted = r.visited.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), r.visited.len());
        assert!(r.visited.iter().all(|&c| !maze.is_blocked(c)));
        assert!(r.path.iter().all(|&c| !maze.is_blocked(c)));
    }

    #[test]
    fn rerun_is_identical() {
        let maze = TestMaze::new(6, 6, &[4, 13, 19, 25]);
        let mut s = Searcher::new(36);
        let first = s.ucs(&maze, Cell(2), Cell(33));
        for _ in 0..5 {
            assert_eq!(s.ucs(&maze, Cell(2), Cell(33)), first);
        }
    }
}
