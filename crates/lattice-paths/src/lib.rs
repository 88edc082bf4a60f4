//! Shortest-path search over lattices.
//!
//! This crate provides the two best-first searches used to solve mazes:
//!
//! - **Uniform Cost Search** ([`Searcher::ucs`]): expands cells in order of
//!   accumulated edge cost.
//! - **A\*** ([`Searcher::astar`]): adds an admissible estimate of the
//!   remaining cost to the priority.
//! - **Reachability** ([`Searcher::reachable`]): flood fill of the cells
//!   connected to a source.
//!
//! Both searches share one engine: a binary min-heap frontier with lazy
//! deletion, a per-cell finalized flag, predecessor links and best known
//! costs. Ties between equal priorities are broken by ascending cell id, so
//! results are reproducible. Every query returns a [`SearchResult`] whose
//! `path` is empty when the goal cannot be reached.
//!
//! All searches run through [`Searcher`], which owns and reuses its node
//! table so that repeated queries on the same lattice do not reallocate.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | reachability |
//! | [`WeightedPather`] : [`Pather`] | Uniform Cost Search |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod algorithm;
mod astar;
mod reachable;
mod result;
mod searcher;
mod traits;
mod ucs;

#[cfg(test)]
mod test_utils;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use result::SearchResult;
pub use searcher::Searcher;
pub use traits::{AstarPather, Pather, WeightedPather};
