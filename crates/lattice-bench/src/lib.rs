//! Batch experiments for lattice maze search.
//!
//! An experiment draws N random mazes from a seeded generator, solves each
//! with both Uniform Cost Search and A*, and summarises per algorithm the
//! mean and sample variance of
//!
//! - an elapsed-time stand-in: visited cells divided by a fixed divisor,
//! - the path length in cells (0 when no route exists).
//!
//! # Example
//!
//! ```
//! use lattice_bench::{BenchConfig, ExperimentRunner};
//! use lattice_paths::Algorithm;
//!
//! let config = BenchConfig::default().with_repetitions(20).with_seed(7);
//! let report = ExperimentRunner::new(config).unwrap().run().unwrap();
//!
//! assert_eq!(report.trials.len(), 20);
//! let ucs = report.statistics(Algorithm::UniformCost);
//! let astar = report.statistics(Algorithm::AStar);
//! // A* never finalizes more cells than UCS on average.
//! assert!(astar.elapsed.mean <= ucs.elapsed.mean);
//! ```
//!
//! Configurations can also be loaded from TOML:
//!
//! ```
//! use lattice_bench::BenchConfig;
//!
//! let config = BenchConfig::from_toml_str(r#"
//!     repetitions = 50
//!     seed = 42
//!
//!     [maze]
//!     cols = 8
//!     rows = 8
//!     barrier_count = 10
//! "#).unwrap();
//!
//! assert_eq!(config.repetitions, 50);
//! assert_eq!(config.maze.cols, 8);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod result;
pub mod runner;
pub mod stats;

pub use config::{BenchConfig, DEFAULT_TIME_DIVISOR};
pub use error::BenchError;
pub use report::CsvExporter;
pub use result::{ExperimentReport, Trial};
pub use runner::ExperimentRunner;
pub use stats::{RunStatistics, Summary, mean, sample_variance};
