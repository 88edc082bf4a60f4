//! Compare UCS and A* over a batch of random mazes.
//!
//! Run: cargo run --bin bench -- --runs 500 --seed 42 --parallel

use std::path::PathBuf;

use clap::Parser;
use lattice_bench::{BenchConfig, CsvExporter, ExperimentRunner, report};
use lattice_demos::init_logging;

#[derive(Parser, Debug)]
#[command(name = "bench", version, about = "Batch statistics for UCS and A* on random mazes")]
struct Args {
    /// TOML experiment configuration; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of mazes, overriding the configuration.
    #[arg(long)]
    runs: Option<usize>,

    /// Generator seed, overriding the configuration.
    #[arg(long)]
    seed: Option<u64>,

    /// Solve the mazes in parallel.
    #[arg(long)]
    parallel: bool,

    /// Also write one CSV row per trial and algorithm to this file.
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            BenchConfig::load(path)?
        }
        None => BenchConfig::default(),
    };
    if let Some(runs) = args.runs {
        config.repetitions = runs;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.parallel {
        config.parallel = true;
    }
    if args.csv.is_none() {
        config.keep_trials = false;
    }

    let report = ExperimentRunner::new(config)?.run()?;
    print!("{}", report::render(&report));

    if let Some(path) = &args.csv {
        CsvExporter::to_file(&report, path)?;
        log::info!("wrote {} trials to {}", report.trials.len(), path.display());
    }
    Ok(())
}

fn main() {
    init_logging();
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
