//! Generator configuration: grid size, barrier count, start/goal regions.

use std::fmt;
use std::ops::Range;

use lattice_core::Lattice;

use crate::MazeError;

/// Which endpoint a region or error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Region {
    Start,
    Goal,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Region::Start => "start",
            Region::Goal => "goal",
        })
    }
}

/// Parameters for [`MazeGen`](crate::MazeGen).
///
/// Regions are half-open ranges of cell ids. When a region is `None` it
/// defaults to whole rows: the first two rows for the start, the last two
/// for the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub cols: usize,
    pub rows: usize,
    pub barrier_count: usize,
    pub start_region: Option<Range<usize>>,
    pub goal_region: Option<Range<usize>>,
}

impl Default for MazeConfig {
    /// The reference instance: 6×6, four barriers, start in `0..12`, goal
    /// in `24..36`.
    fn default() -> Self {
        Self::with_size(6, 6, 4)
    }
}

impl MazeConfig {
    /// A `cols × rows` configuration with the default row regions.
    pub fn with_size(cols: usize, rows: usize, barrier_count: usize) -> Self {
        Self {
            cols,
            rows,
            barrier_count,
            start_region: None,
            goal_region: None,
        }
    }

    /// Set an explicit start region (builder).
    pub fn with_start_region(mut self, span: Range<usize>) -> Self {
        self.start_region = Some(span);
        self
    }

    /// Set an explicit goal region (builder).
    pub fn with_goal_region(mut self, span: Range<usize>) -> Self {
        self.goal_region = Some(span);
        self
    }

    /// Cell ids `start` is drawn from.
    pub fn start_span(&self, lattice: &Lattice) -> Range<usize> {
        self.start_region
            .clone()
            .unwrap_or_else(|| lattice.rows_span(0, 2))
    }

    /// Cell ids `goal` is drawn from.
    pub fn goal_span(&self, lattice: &Lattice) -> Range<usize> {
        self.goal_region
            .clone()
            .unwrap_or_else(|| lattice.rows_span(lattice.rows().saturating_sub(2), lattice.rows()))
    }

    /// Check the configuration and return the lattice it describes.
    pub fn validate(&self) -> Result<Lattice, MazeError> {
        let lattice = Lattice::new(self.cols, self.rows)?;
        let len = lattice.len();

        let start = self.start_span(&lattice);
        let goal = self.goal_span(&lattice);
        for (region, span) in [(Region::Start, &start), (Region::Goal, &goal)] {
            if span.is_empty() {
                return Err(MazeError::EmptyRegion { region });
            }
            if span.end > len {
                return Err(MazeError::RegionOutOfBounds {
                    region,
                    span: span.clone(),
                    len,
                });
            }
        }
        if start.start < goal.end && goal.start < start.end {
            return Err(MazeError::OverlappingRegions { start, goal });
        }

        // Two distinct non-empty regions guarantee len >= 2.
        let available = len - 2;
        if self.barrier_count > available {
            return Err(MazeError::TooManyBarriers {
                requested: self.barrier_count,
                available,
            });
        }
        Ok(lattice)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let c: MazeConfig = serde_json::from_str(r#"{"barrier_count": 6}"#).unwrap();
        assert_eq!(c, MazeConfig::with_size(6, 6, 6));
    }

    #[test]
    fn regions_round_trip() {
        let c = MazeConfig::with_size(8, 8, 5).with_start_region(0..8);
        let json = serde_json::to_string(&c).unwrap();
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
