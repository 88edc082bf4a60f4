use std::cmp::Ordering;
use std::collections::BinaryHeap;

use lattice_core::{Cell, Lattice};

use crate::traits::{AstarPather, WeightedPather};
use crate::{Algorithm, SearchResult};

/// Parent sentinel: the node has no predecessor.
const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal node for best-first searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    /// Best known cost from the start.
    pub(crate) g: f64,
    pub(crate) parent: usize,
    /// Query this node was last touched by; anything else is stale.
    pub(crate) generation: u32,
    /// Finalized: popped from the frontier and never revisited.
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// Frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest priority first, and the smallest cell id among equal priorities.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Reusable state for searches over a lattice of a given size.
///
/// `Searcher` owns the node table, the frontier heap and scratch buffers.
/// Nodes are invalidated lazily with a generation counter, so a query only
/// touches the cells it actually reaches and repeated queries incur no
/// allocations after the first one.
pub struct Searcher {
    pub(crate) len: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    // reachability caches
    pub(crate) seen: Vec<bool>,
    pub(crate) stack: Vec<usize>,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Cell>,
}

impl Searcher {
    /// Create a searcher for cell ids `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            nodes: vec![Node::default(); len],
            generation: 0,
            open: BinaryHeap::new(),
            seen: vec![false; len],
            stack: Vec::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Create a searcher sized for `lattice`.
    pub fn for_lattice(lattice: &Lattice) -> Self {
        Self::new(lattice.len())
    }

    /// Number of cell ids this searcher covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the searcher covers no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Run `algorithm` from `start` to `goal`.
    pub fn search<P: AstarPather>(
        &mut self,
        algorithm: Algorithm,
        pather: &P,
        start: Cell,
        goal: Cell,
    ) -> SearchResult {
        match algorithm {
            Algorithm::UniformCost => self.ucs(pather, start, goal),
            Algorithm::AStar => self.astar(pather, start, goal),
        }
    }

    /// Index of `c` in the node table, or `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Cell) -> Option<usize> {
        (c.index() < self.len).then_some(c.index())
    }

    /// Start a new query generation, clearing the table on wrap-around so
    /// that no stale node can alias the new generation.
    fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    /// Best-first search shared by UCS and A*.
    ///
    /// The frontier priority of a cell is its best known cost plus
    /// `estimate(cell)`; UCS passes a zero estimate.
    pub(crate) fn best_first<P: WeightedPather>(
        &mut self,
        algorithm: Algorithm,
        pather: &P,
        start: Cell,
        goal: Cell,
        estimate: impl Fn(Cell) -> f64,
    ) -> SearchResult {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            log::warn!(
                "{algorithm}: endpoints {start} -> {goal} outside searcher range 0..{}",
                self.len
            );
            return SearchResult::unreachable(algorithm, Vec::new());
        };

        let cur_gen = self.next_generation();

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = false;
        }

        let mut open = std::mem::take(&mut self.open);
        open.clear();
        open.push(NodeRef {
            idx: start_idx,
            f: estimate(start),
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut visited = Vec::new();

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries: a cheaper copy was already finalized.
            if self.nodes[ci].closed {
                continue;
            }
            self.nodes[ci].closed = true;
            visited.push(Cell(ci));

            if ci == goal_idx {
                break;
            }

            let current_g = self.nodes[ci].g;
            let cc = Cell(ci);

            nbuf.clear();
            pather.neighbors(cc, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let tentative = current_g + pather.cost(cc, nc);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Finalized cells keep their parent even if rounding
                    // offers an equal-cost route that compares lower.
                    if n.closed || tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                n.g = tentative;
                n.parent = ci;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative + estimate(nc),
                });
            }
        }

        open.clear();
        self.open = open;
        self.nbuf = nbuf;

        let result = match self.reconstruct(start_idx, goal_idx, cur_gen) {
            Some(path) => {
                let cost = self.nodes[goal_idx].g;
                SearchResult::new(algorithm, visited, path, cost)
            }
            None => SearchResult::unreachable(algorithm, visited),
        };
        log::trace!(
            "{algorithm}: {start} -> {goal} visited {} cells, path of {} cells",
            result.visited_count(),
            result.path_len()
        );
        result
    }

    /// Walk predecessor links back from the goal. `None` if some cell on the
    /// way has no predecessor without being the start, i.e. the goal was
    /// never reached.
    fn reconstruct(&self, start_idx: usize, goal_idx: usize, cur_gen: u32) -> Option<Vec<Cell>> {
        if self.nodes[goal_idx].generation != cur_gen {
            return None;
        }
        let mut path = vec![Cell(goal_idx)];
        let mut ci = goal_idx;
        while ci != start_idx {
            ci = self.nodes[ci].parent;
            if ci == NO_PARENT {
                return None;
            }
            path.push(Cell(ci));
        }
        path.reverse();
        Some(path)
    }
}
