use thiserror::Error;

/// Errors raised when building a [`Lattice`](crate::Lattice).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// One of the dimensions is zero.
    #[error("lattice dimensions must be positive, got {cols}x{rows}")]
    EmptyGrid { cols: usize, rows: usize },
    /// The cell count does not fit in the coordinate type.
    #[error("lattice of {cols}x{rows} is too large")]
    TooLarge { cols: usize, rows: usize },
}
