//! Maze instances for lattice search experiments.
//!
//! A maze is a [`Lattice`](lattice_core::Lattice) with a start cell, a goal
//! cell and a set of impassable barrier cells. This crate provides:
//!
//! - [`MazeConfig`]: dimensions, barrier count and start/goal regions,
//!   validated before any maze is drawn.
//! - [`MazeGen`]: draws random [`MazeInstance`]s from an injected RNG, so a
//!   fixed seed reproduces the same sequence of mazes.
//! - [`MazeInstance`]: an immutable maze that implements the
//!   `lattice-paths` pather traits (8-way moves, Euclidean edge cost,
//!   Chebyshev estimate).
//! - [`render`]: plain-text layout and path overlays.

pub mod config;
pub mod error;
pub mod generator;
pub mod maze;
pub mod render;

pub use config::{MazeConfig, Region};
pub use error::MazeError;
pub use generator::{MazeGen, generate_maze};
pub use maze::MazeInstance;
