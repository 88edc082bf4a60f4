//! Text and CSV output for experiment reports.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use lattice_paths::Algorithm;

use crate::ExperimentReport;

/// Render the per-algorithm statistics as a text table.
///
/// ```
/// use lattice_bench::{BenchConfig, ExperimentRunner, report};
///
/// let config = BenchConfig::default().with_repetitions(5).with_seed(1);
/// let report = ExperimentRunner::new(config).unwrap().run().unwrap();
/// let text = report::render(&report);
/// assert!(text.contains("UCS"));
/// assert!(text.contains("A*"));
/// ```
pub fn render(report: &ExperimentReport) -> String {
    StatsTable(report).to_string()
}

struct StatsTable<'a>(&'a ExperimentReport);

impl fmt::Display for StatsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(
            f,
            "{} mazes, seed {}, time divisor {}",
            report.repetitions, report.seed, report.time_divisor
        )?;
        writeln!(
            f,
            "{:<9} {:>12} {:>12} {:>12} {:>12} {:>11}",
            "algorithm", "time mean", "time var", "length mean", "length var", "unreachable"
        )?;
        for algorithm in Algorithm::ALL {
            let s = report.statistics(algorithm);
            writeln!(
                f,
                "{:<9} {:>12.6} {:>12.6} {:>12.4} {:>12.4} {:>11}",
                algorithm,
                s.elapsed.mean,
                s.elapsed.variance,
                s.path_length.mean,
                s.path_length.variance,
                s.unreachable
            )?;
        }
        Ok(())
    }
}

/// Per-trial CSV export.
pub struct CsvExporter;

impl CsvExporter {
    /// One row per trial and algorithm. Unreachable goals have an empty
    /// cost column and a path length of 0.
    pub fn to_string(report: &ExperimentReport) -> String {
        CsvRows(report).to_string()
    }

    /// Write the CSV export to `path`.
    pub fn to_file(report: &ExperimentReport, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(report))
    }
}

struct CsvRows<'a>(&'a ExperimentReport);

impl fmt::Display for CsvRows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(
            f,
            "trial,algorithm,start,goal,visited,elapsed,path_length,cost"
        )?;
        for trial in &report.trials {
            for algorithm in Algorithm::ALL {
                let r = trial.result(algorithm);
                write!(
                    f,
                    "{},{},{},{},{},{},{},",
                    trial.index,
                    algorithm,
                    trial.maze.start(),
                    trial.maze.goal(),
                    r.visited_count(),
                    r.elapsed_metric(report.time_divisor),
                    r.path_len(),
                )?;
                if let Some(cost) = r.cost() {
                    write!(f, "{cost:.6}")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Trial;
    use lattice_core::{Cell, Lattice};
    use lattice_maze::MazeInstance;
    use lattice_paths::Searcher;

    fn report() -> ExperimentReport {
        let l = Lattice::new(6, 6).unwrap();
        let mut s = Searcher::new(36);
        let open = MazeInstance::new(l, Cell(0), Cell(35), std::iter::empty()).unwrap();
        let walled = MazeInstance::new(l, Cell(0), Cell(35), [1, 6, 7].map(Cell)).unwrap();
        let trials = vec![Trial::run(0, open, &mut s), Trial::run(1, walled, &mut s)];
        ExperimentReport::from_trials(9, 1000.0, trials, true).unwrap()
    }

    #[test]
    fn table_has_one_row_per_algorithm() {
        let text = render(&report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "2 mazes, seed 9, time divisor 1000");
        assert!(lines[2].starts_with("UCS "));
        assert!(lines[3].starts_with("A* "));
        assert!(lines[3].ends_with(" 1"));
    }

    #[test]
    fn csv_rows() {
        let csv = CsvExporter::to_string(&report());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "trial,algorithm,start,goal,visited,elapsed,path_length,cost");
        // Open grid: UCS finalizes all 36 cells, the diagonal costs 5√2.
        assert_eq!(lines[1], "0,UCS,0,35,36,0.036,6,7.071068");
        assert_eq!(lines[2], "0,A*,0,35,14,0.014,6,7.071068");
        assert_eq!(lines[3], "1,UCS,0,35,1,0.001,0,");
        assert_eq!(lines[4], "1,A*,0,35,1,0.001,0,");
    }

    #[test]
    fn csv_file_matches_string_export() {
        let report = report();
        let path = std::env::temp_dir().join(format!("lattice-bench-{}.csv", std::process::id()));
        CsvExporter::to_file(&report, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, CsvExporter::to_string(&report));
        assert!(written.ends_with("1,A*,0,35,1,0.001,0,\n"));
    }
}
