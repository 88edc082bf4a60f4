use std::ops::Range;

use lattice_core::{Cell, Lattice, LatticeError};
use thiserror::Error;

use crate::Region;

/// Errors raised when configuring a generator or assembling a maze by hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The grid dimensions are unusable.
    #[error(transparent)]
    Lattice(#[from] LatticeError),
    /// A start or goal region contains no cells.
    #[error("{region} region is empty")]
    EmptyRegion { region: Region },
    /// A region reaches past the last cell of the grid.
    #[error("{region} region {span:?} exceeds the {len} cells of the grid")]
    RegionOutOfBounds {
        region: Region,
        span: Range<usize>,
        len: usize,
    },
    /// Start and goal regions share cells, so start could equal goal.
    #[error("start region {start:?} and goal region {goal:?} overlap")]
    OverlappingRegions {
        start: Range<usize>,
        goal: Range<usize>,
    },
    /// More barriers than cells left once start and goal are placed.
    #[error("{requested} barriers requested but only {available} cells are free")]
    TooManyBarriers { requested: usize, available: usize },
    /// A hand-built maze refers to a cell outside its lattice.
    #[error("cell {cell} is outside the {lattice} grid")]
    CellOutOfBounds { cell: Cell, lattice: Lattice },
    /// A hand-built maze has the same start and goal.
    #[error("start and goal are the same cell {0}")]
    StartIsGoal(Cell),
    /// A hand-built maze puts a barrier on its start or goal.
    #[error("{region} cell {cell} is a barrier")]
    EndpointBlocked { region: Region, cell: Cell },
}

impl MazeError {
    /// Whether this is a generator configuration error, as opposed to an
    /// inconsistent hand-built maze.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            MazeError::Lattice(_)
                | MazeError::EmptyRegion { .. }
                | MazeError::RegionOutOfBounds { .. }
                | MazeError::OverlappingRegions { .. }
                | MazeError::TooManyBarriers { .. }
        )
    }
}
