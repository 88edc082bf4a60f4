//! Helpers shared by the `maze` and `bench` command-line demos.

use std::fmt;

use lattice_core::Cell;
use lattice_maze::{MazeInstance, render};
use lattice_paths::SearchResult;

/// Install `env_logger`, defaulting to `info` unless `RUST_LOG` is set.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Describe one search result: visited order, metric, path, cost and the
/// path drawn over the maze.
pub fn describe_result(maze: &MazeInstance, result: &SearchResult, time_divisor: f64) -> String {
    Description {
        maze,
        result,
        time_divisor,
    }
    .to_string()
}

struct Description<'a> {
    maze: &'a MazeInstance,
    result: &'a SearchResult,
    time_divisor: f64,
}

struct CellList<'a>(&'a [Cell]);

impl fmt::Display for CellList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        writeln!(f, "{}:", r.algorithm)?;
        writeln!(f, "  Visited: {}", CellList(&r.visited))?;
        writeln!(
            f,
            "  Elapsed metric: {:.6} ({} cells)",
            r.elapsed_metric(self.time_divisor),
            r.visited_count()
        )?;
        match r.cost() {
            Some(cost) => {
                writeln!(f, "  Path: {}", CellList(&r.path))?;
                writeln!(f, "  Cost: {cost:.4}")?;
                writeln!(f)?;
                writeln!(f, "{}", render::render_path(self.maze, &r.path))
            }
            None => writeln!(f, "  Path: none, the goal is unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::{Cell, Lattice};
    use lattice_paths::Searcher;

    #[test]
    fn describes_reachable_and_unreachable() {
        let l = Lattice::new(6, 6).unwrap();
        let mut s = Searcher::new(36);

        let maze = MazeInstance::new(l, Cell(0), Cell(35), [14, 15, 20, 21].map(Cell)).unwrap();
        let r = s.astar(&maze, maze.start(), maze.goal());
        let text = describe_result(&maze, &r, 1000.0);
        assert!(text.starts_with("A*:\n"));
        assert!(text.contains("  Path: [0, 7, 8, 9, 16, 22, 29, 35]\n"));
        assert!(text.contains("  Cost: 8.2426\n"));
        assert!(text.contains("  Elapsed metric: 0.022000 (22 cells)\n"));
        assert!(text.contains("[S] [ 1] [ 2] [ 3] [ 4] [ 5]"));

        let walled = MazeInstance::new(l, Cell(0), Cell(35), [1, 6, 7].map(Cell)).unwrap();
        let r = s.ucs(&walled, walled.start(), walled.goal());
        let text = describe_result(&walled, &r, 1000.0);
        assert!(text.starts_with("UCS:\n  Visited: [0]\n"));
        assert!(text.ends_with("  Path: none, the goal is unreachable\n"));
    }

    #[test]
    fn cell_lists_are_bracketed() {
        assert_eq!(CellList(&[]).to_string(), "[]");
        assert_eq!(CellList(&[Cell(4)]).to_string(), "[4]");
        assert_eq!(CellList(&[Cell(0), Cell(7), Cell(14)]).to_string(), "[0, 7, 14]");
    }
}
