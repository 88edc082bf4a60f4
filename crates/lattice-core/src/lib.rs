//! **lattice-core**: the grid model shared by the *lattice* crates.
//!
//! A [`Lattice`] is a fixed `cols × rows` rectangle of cells. Every cell has
//! an integer id ([`Cell`]) and a coordinate ([`Point`]) related by
//! `id = y * cols + x`. Adjacency is 8-directional and moving between two
//! adjacent cells costs their Euclidean distance (1 or √2).

pub mod cell;
pub mod distance;
pub mod error;
pub mod geom;
pub mod lattice;

pub use cell::Cell;
pub use distance::{chebyshev, euclidean};
pub use error::LatticeError;
pub use geom::Point;
pub use lattice::Lattice;
