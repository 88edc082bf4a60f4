//! The [`Cell`] type, a lattice position identified by its integer id.

use std::fmt;

/// A lattice cell id.
///
/// Ids are dense and row-major: `id = y * cols + x`. Ordering on `Cell` is
/// plain numeric ordering, which is also the order in which the search
/// engine breaks priority ties.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cell(pub usize);

impl Cell {
    /// Create a cell from its raw id.
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// The raw id, usable as an index into per-cell tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Cell {
    #[inline]
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl From<Cell> for usize {
    #[inline]
    fn from(c: Cell) -> Self {
        c.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
