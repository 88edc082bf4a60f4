use lattice_core::Cell;

use crate::Algorithm;

/// Outcome of one search run.
///
/// An empty `path` means the goal could not be reached. That is an ordinary
/// outcome (barriers may wall the start in), not a failure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Which search produced this result.
    pub algorithm: Algorithm,
    /// Cells in the order they were finalized (popped and closed).
    pub visited: Vec<Cell>,
    /// Route from start to goal, both inclusive. Empty if unreachable.
    pub path: Vec<Cell>,
    total_cost: f64,
}

impl SearchResult {
    pub(crate) fn new(
        algorithm: Algorithm,
        visited: Vec<Cell>,
        path: Vec<Cell>,
        total_cost: f64,
    ) -> Self {
        Self {
            algorithm,
            visited,
            path,
            total_cost,
        }
    }

    pub(crate) fn unreachable(algorithm: Algorithm, visited: Vec<Cell>) -> Self {
        Self::new(algorithm, visited, Vec::new(), 0.0)
    }

    /// Whether a route to the goal was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of cells on the path (start and goal included), 0 if none.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Number of cells finalized during the search.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Sum of the edge costs along the path, or `None` if unreachable.
    #[inline]
    pub fn cost(&self) -> Option<f64> {
        self.is_reachable().then_some(self.total_cost)
    }

    /// Stand-in for elapsed time: the visited count scaled by `divisor`.
    ///
    /// This is deliberately not a clock measurement, so it is identical
    /// across reruns and machines.
    #[inline]
    pub fn elapsed_metric(&self, divisor: f64) -> f64 {
        self.visited.len() as f64 / divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_has_no_cost() {
        let r = SearchResult::unreachable(Algorithm::AStar, vec![Cell(0), Cell(1)]);
        assert!(!r.is_reachable());
        assert_eq!(r.cost(), None);
        assert_eq!(r.path_len(), 0);
        assert_eq!(r.visited_count(), 2);
    }

    #[test]
    fn metric_scales_visits() {
        let visited = (0..250).map(Cell).collect();
        let r = SearchResult::new(Algorithm::UniformCost, visited, vec![Cell(0)], 0.0);
        assert_eq!(r.elapsed_metric(1000.0), 0.25);
        assert_eq!(r.cost(), Some(0.0));
    }
}
