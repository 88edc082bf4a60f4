//! The immutable [`MazeInstance`] and its pather implementation.

use std::collections::BTreeSet;

use lattice_core::{Cell, Lattice, chebyshev};
use lattice_paths::{AstarPather, Pather, WeightedPather};

use crate::{MazeError, Region};

/// A lattice with a start, a goal and a set of impassable barrier cells.
///
/// Invariants, checked on construction: every cell lies in the lattice,
/// `start != goal`, and neither endpoint is a barrier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MazeParts", into = "MazeParts"))]
pub struct MazeInstance {
    lattice: Lattice,
    start: Cell,
    goal: Cell,
    barriers: BTreeSet<Cell>,
    blocked: Vec<bool>,
}

impl MazeInstance {
    /// Assemble a maze by hand, checking its invariants.
    pub fn new(
        lattice: Lattice,
        start: Cell,
        goal: Cell,
        barriers: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, MazeError> {
        let barriers: BTreeSet<Cell> = barriers.into_iter().collect();
        let out_of_bounds = [start, goal]
            .into_iter()
            .chain(barriers.iter().copied())
            .find(|&c| !lattice.contains_cell(c));
        if let Some(cell) = out_of_bounds {
            return Err(MazeError::CellOutOfBounds { cell, lattice });
        }
        if start == goal {
            return Err(MazeError::StartIsGoal(start));
        }
        for (region, cell) in [(Region::Start, start), (Region::Goal, goal)] {
            if barriers.contains(&cell) {
                return Err(MazeError::EndpointBlocked { region, cell });
            }
        }
        Ok(Self::from_parts(lattice, start, goal, barriers))
    }

    /// Build from parts already known to be consistent.
    pub(crate) fn from_parts(
        lattice: Lattice,
        start: Cell,
        goal: Cell,
        barriers: BTreeSet<Cell>,
    ) -> Self {
        debug_assert!(start != goal && !barriers.contains(&start) && !barriers.contains(&goal));
        let mut blocked = vec![false; lattice.len()];
        for b in &barriers {
            blocked[b.index()] = true;
        }
        Self {
            lattice,
            start,
            goal,
            barriers,
            blocked,
        }
    }

    /// The underlying grid.
    #[inline]
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Barrier cells in ascending id order.
    #[inline]
    pub fn barriers(&self) -> &BTreeSet<Cell> {
        &self.barriers
    }

    /// Whether `c` is impassable. Out-of-range cells are not barriers.
    #[inline]
    pub fn is_barrier(&self, c: Cell) -> bool {
        self.blocked.get(c.index()).copied().unwrap_or(false)
    }

    /// Total edge cost of walking `path`, or `None` if it is empty or takes
    /// a step that is not a legal move (non-adjacent, off-grid, or onto a
    /// barrier).
    pub fn path_cost(&self, path: &[Cell]) -> Option<f64> {
        let first = *path.first()?;
        if !self.lattice.contains_cell(first) || self.is_barrier(first) {
            return None;
        }
        let mut total = 0.0;
        for step in path.windows(2) {
            let (a, b) = (step[0], step[1]);
            let adjacent = match (self.lattice.point(a), self.lattice.point(b)) {
                (Some(pa), Some(pb)) => pa.is_adjacent(pb),
                _ => false,
            };
            if !adjacent || self.is_barrier(b) {
                return None;
            }
            total += self.lattice.edge_cost(a, b);
        }
        Some(total)
    }
}

impl Pather for MazeInstance {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        let from = buf.len();
        self.lattice.neighbors(c, buf);
        let mut keep = from;
        for i in from..buf.len() {
            if !self.blocked[buf[i].index()] {
                buf[keep] = buf[i];
                keep += 1;
            }
        }
        buf.truncate(keep);
    }
}

impl WeightedPather for MazeInstance {
    fn cost(&self, from: Cell, to: Cell) -> f64 {
        self.lattice.edge_cost(from, to)
    }
}

impl AstarPather for MazeInstance {
    /// Chebyshev distance: every move shortens it by at most 1 and costs at
    /// least 1, so it is admissible and consistent on this lattice.
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        match (self.lattice.point(from), self.lattice.point(to)) {
            (Some(a), Some(b)) => f64::from(chebyshev(a, b)),
            _ => 0.0,
        }
    }
}

/// Serialized form of a [`MazeInstance`]; the barrier bitmap is rebuilt.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MazeParts {
    lattice: Lattice,
    start: Cell,
    goal: Cell,
    barriers: BTreeSet<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<MazeParts> for MazeInstance {
    type Error = MazeError;

    fn try_from(p: MazeParts) -> Result<Self, Self::Error> {
        MazeInstance::new(p.lattice, p.start, p.goal, p.barriers)
    }
}

#[cfg(feature = "serde")]
impl From<MazeInstance> for MazeParts {
    fn from(m: MazeInstance) -> Self {
        MazeParts {
            lattice: m.lattice,
            start: m.start,
            goal: m.goal,
            barriers: m.barriers,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let l = Lattice::new(6, 6).unwrap();
        let maze = MazeInstance::new(l, Cell(2), Cell(30), [9, 10, 22].map(Cell)).unwrap();
        let json = serde_json::to_string(&maze).unwrap();
        let back: MazeInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, maze);
        assert!(back.is_barrier(Cell(22)));
    }

    #[test]
    fn blocked_endpoint_fails_to_deserialize() {
        let json = r#"{"lattice":{"cols":6,"rows":6},"start":0,"goal":35,"barriers":[0]}"#;
        assert!(serde_json::from_str::<MazeInstance>(json).is_err());
    }
}
