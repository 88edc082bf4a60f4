//! Small hand-built mazes for unit tests.

use lattice_core::{Cell, Lattice, chebyshev};
use rand::SeedableRng;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;

use crate::traits::{AstarPather, Pather, WeightedPather};

/// A lattice with a fixed set of blocked cells.
pub(crate) struct TestMaze {
    pub(crate) lattice: Lattice,
    blocked: Vec<bool>,
}

impl TestMaze {
    pub(crate) fn new(cols: usize, rows: usize, barriers: &[usize]) -> Self {
        let lattice = Lattice::new(cols, rows).unwrap();
        let mut blocked = vec![false; lattice.len()];
        for &b in barriers {
            blocked[b] = true;
        }
        Self { lattice, blocked }
    }

    pub(crate) fn is_blocked(&self, c: Cell) -> bool {
        self.blocked[c.index()]
    }

    /// Total Euclidean cost of a path, checking every step is a legal move.
    pub(crate) fn path_cost(&self, path: &[Cell]) -> f64 {
        path.windows(2)
            .map(|w| {
                let mut buf = Vec::new();
                self.neighbors(w[0], &mut buf);
                assert!(buf.contains(&w[1]), "illegal step {} -> {}", w[0], w[1]);
                self.cost(w[0], w[1])
            })
            .sum()
    }
}

impl Pather for TestMaze {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        let from = buf.len();
        self.lattice.neighbors(c, buf);
        let mut i = from;
        while i < buf.len() {
            if self.blocked[buf[i].index()] {
                buf.remove(i);
            } else {
                i += 1;
            }
        }
    }
}

impl WeightedPather for TestMaze {
    fn cost(&self, from: Cell, to: Cell) -> f64 {
        self.lattice.edge_cost(from, to)
    }
}

impl AstarPather for TestMaze {
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        match (self.lattice.point(from), self.lattice.point(to)) {
            (Some(a), Some(b)) => f64::from(chebyshev(a, b)),
            _ => 0.0,
        }
    }
}

/// Seeded barrier layout: `count` distinct cells of `0..len`, none in `keep`.
pub(crate) fn scattered_barriers(seed: u64, len: usize, count: usize, keep: &[usize]) -> Vec<usize> {
    let free: Vec<usize> = (0..len).filter(|c| !keep.contains(c)).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    index::sample(&mut rng, free.len(), count)
        .into_iter()
        .map(|i| free[i])
        .collect()
}

mod tests {
    use super::*;

    #[test]
    fn scattered_barriers_are_seeded_and_distinct() {
        let a = scattered_barriers(5, 64, 14, &[3, 50]);
        assert_eq!(a, scattered_barriers(5, 64, 14, &[3, 50]));
        assert_ne!(a, scattered_barriers(6, 64, 14, &[3, 50]));

        let mut sorted = a.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 14);
        assert!(a.iter().all(|&c| c < 64 && c != 3 && c != 50));
    }
}
