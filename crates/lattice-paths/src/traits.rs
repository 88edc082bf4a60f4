use lattice_core::Cell;

/// Minimal search interface: neighbour enumeration.
pub trait Pather {
    /// Append the passable neighbours of `c` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Cell, to: Cell) -> f64;
}

/// Pather with a heuristic, as needed by A*.
pub trait AstarPather: WeightedPather {
    /// Estimated cost of the cheapest route from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> f64;
}
