//! The [`Lattice`]: a `cols × rows` rectangle of cells with 8-way adjacency.

use std::fmt;
use std::ops::Range;

use crate::distance::euclidean;
use crate::{Cell, LatticeError, Point};

/// Dimensions of a rectangular lattice and the id ↔ coordinate mapping.
///
/// Cell `id = y * cols + x` for `0 ≤ x < cols`, `0 ≤ y < rows`. The mapping
/// is a bijection between `0..len()` and the in-bounds points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Dims", into = "Dims"))]
pub struct Lattice {
    cols: usize,
    rows: usize,
}

impl Lattice {
    /// Create a lattice of `cols × rows` cells. Both must be positive.
    pub fn new(cols: usize, rows: usize) -> Result<Self, LatticeError> {
        if cols == 0 || rows == 0 {
            return Err(LatticeError::EmptyGrid { cols, rows });
        }
        let fits = i32::try_from(cols).is_ok()
            && i32::try_from(rows).is_ok()
            && cols.checked_mul(rows).is_some();
        if !fits {
            return Err(LatticeError::TooLarge { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// Number of columns (width).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows (height).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    /// Always `false`: a lattice has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `p` lies inside the lattice.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.cols && (p.y as usize) < self.rows
    }

    /// Whether `c` is a valid id for this lattice.
    #[inline]
    pub fn contains_cell(&self, c: Cell) -> bool {
        c.index() < self.len()
    }

    /// Id of the cell at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(Cell(p.y as usize * self.cols + p.x as usize))
    }

    /// Id of the cell at column `x`, row `y`.
    #[inline]
    pub fn cell_xy(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(Cell(y * self.cols + x))
    }

    /// Coordinates of `c`, or `None` if the id is out of range.
    #[inline]
    pub fn point(&self, c: Cell) -> Option<Point> {
        if !self.contains_cell(c) {
            return None;
        }
        let i = c.index();
        Some(Point::new((i % self.cols) as i32, (i / self.cols) as i32))
    }

    /// Append the in-bounds neighbours of `c` to `buf`, in ascending id order.
    ///
    /// The caller clears `buf` first. Nothing is appended for an
    /// out-of-range `c`.
    pub fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        let Some(p) = self.point(c) else {
            return;
        };
        buf.extend(p.neighbors_8().into_iter().filter_map(|n| self.cell(n)));
    }

    /// Cost of stepping between two cells: the Euclidean distance of their
    /// coordinates. Returns `f64::INFINITY` if either id is out of range.
    #[inline]
    pub fn edge_cost(&self, from: Cell, to: Cell) -> f64 {
        match (self.point(from), self.point(to)) {
            (Some(a), Some(b)) => euclidean(a, b),
            _ => f64::INFINITY,
        }
    }

    /// Row-major iterator over every cell id.
    #[inline]
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        (0..self.len()).map(Cell)
    }

    /// Ids covering the whole rows `[y0, y1)`, clamped to the lattice.
    ///
    /// `rows_span(0, 2)` is the first two rows; on a 6×6 lattice that is
    /// `0..12`.
    #[inline]
    pub fn rows_span(&self, y0: usize, y1: usize) -> Range<usize> {
        let y0 = y0.min(self.rows);
        let y1 = y1.clamp(y0, self.rows);
        y0 * self.cols..y1 * self.cols
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Plain dimensions used as the serialized form of a [`Lattice`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Dims {
    cols: usize,
    rows: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<Dims> for Lattice {
    type Error = LatticeError;

    fn try_from(d: Dims) -> Result<Self, Self::Error> {
        Lattice::new(d.cols, d.rows)
    }
}

#[cfg(feature = "serde")]
impl From<Lattice> for Dims {
    fn from(l: Lattice) -> Self {
        Dims {
            cols: l.cols,
            rows: l.rows,
        }
    }
}
