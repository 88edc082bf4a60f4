//! Batch statistics: mean and sample variance.

use lattice_paths::{Algorithm, SearchResult};
use serde::{Deserialize, Serialize};

use crate::BenchError;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Unbiased sample variance, Σ(xᵢ − x̄)² / (N − 1).
///
/// Fails with [`BenchError::InsufficientSamples`] when `N < 2`.
pub fn sample_variance(samples: &[f64]) -> Result<f64, BenchError> {
    let n = samples.len();
    let m = match mean(samples) {
        Some(m) if n >= 2 => m,
        _ => return Err(BenchError::InsufficientSamples { samples: n }),
    };
    let ss: f64 = samples.iter().map(|x| (x - m) * (x - m)).sum();
    Ok(ss / (n - 1) as f64)
}

/// Mean and sample variance of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub variance: f64,
}

impl Summary {
    /// Summarise `samples`; needs at least two of them.
    pub fn from_samples(samples: &[f64]) -> Result<Self, BenchError> {
        let variance = sample_variance(samples)?;
        let mean = mean(samples).unwrap_or_default();
        Ok(Self { mean, variance })
    }

    /// Sample standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Per-algorithm statistics over a batch of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub algorithm: Algorithm,
    /// Number of results summarised.
    pub samples: usize,
    /// Elapsed-time stand-in: visited cells over the time divisor.
    pub elapsed: Summary,
    /// Path length in cells, 0 for unreachable goals.
    pub path_length: Summary,
    /// How many results found no route.
    pub unreachable: usize,
}

impl RunStatistics {
    /// Summarise `results`, all produced by `algorithm`.
    pub fn from_results<'a>(
        algorithm: Algorithm,
        results: impl IntoIterator<Item = &'a SearchResult>,
        time_divisor: f64,
    ) -> Result<Self, BenchError> {
        let mut elapsed = Vec::new();
        let mut lengths = Vec::new();
        let mut unreachable = 0;
        for r in results {
            debug_assert_eq!(r.algorithm, algorithm);
            elapsed.push(r.elapsed_metric(time_divisor));
            lengths.push(r.path_len() as f64);
            if !r.is_reachable() {
                unreachable += 1;
            }
        }
        Ok(Self {
            algorithm,
            samples: elapsed.len(),
            elapsed: Summary::from_samples(&elapsed)?,
            path_length: Summary::from_samples(&lengths)?,
            unreachable,
        })
    }
}
