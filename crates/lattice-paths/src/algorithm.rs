use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The search strategies a [`Searcher`](crate::Searcher) can run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Uniform Cost Search: priority is the accumulated cost.
    UniformCost,
    /// A*: priority is the accumulated cost plus the Chebyshev estimate.
    AStar,
}

impl Algorithm {
    /// Every algorithm, in reporting order.
    pub const ALL: [Algorithm; 2] = [Algorithm::UniformCost, Algorithm::AStar];

    /// Short display label.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::UniformCost => "UCS",
            Algorithm::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search algorithm \u{201c}{0}\u{201d} (expected ucs or astar)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ucs" | "uniform" | "uniform_cost" | "dijkstra" => Ok(Algorithm::UniformCost),
            "astar" | "a*" | "a_star" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("ucs".parse(), Ok(Algorithm::UniformCost));
        assert_eq!("UCS".parse(), Ok(Algorithm::UniformCost));
        assert_eq!("A*".parse(), Ok(Algorithm::AStar));
        assert_eq!(" astar ".parse(), Ok(Algorithm::AStar));
        assert!("bfs".parse::<Algorithm>().is_err());
    }

    #[test]
    fn labels_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse(), Ok(a));
        }
        assert_eq!(format!("{:<4}|", Algorithm::AStar), "A*  |");
    }
}
