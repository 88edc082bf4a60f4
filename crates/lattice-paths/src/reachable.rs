//! Flood fill over a pather's neighbour relation.

use lattice_core::Cell;

use crate::Searcher;
use crate::traits::Pather;

impl Searcher {
    /// Every cell connected to `from` (itself included), in ascending id
    /// order. Empty if `from` is out of range.
    ///
    /// A search whose goal is unreachable finalizes exactly these cells.
    pub fn reachable<P: Pather>(&mut self, pather: &P, from: Cell) -> Vec<Cell> {
        let Some(si) = self.idx(from) else {
            return Vec::new();
        };
        for v in self.seen.iter_mut() {
            *v = false;
        }

        let mut found = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        // Iterative DFS from `from`.
        self.stack.clear();
        self.stack.push(si);
        self.seen[si] = true;

        while let Some(ci) = self.stack.pop() {
            found.push(Cell(ci));
            nbuf.clear();
            pather.neighbors(Cell(ci), &mut nbuf);

            for &n in nbuf.iter() {
                if let Some(ni) = self.idx(n) {
                    if !self.seen[ni] {
                        self.seen[ni] = true;
                        self.stack.push(ni);
                    }
                }
            }
        }

        self.nbuf = nbuf;
        found.sort_unstable();
        found
    }
}
