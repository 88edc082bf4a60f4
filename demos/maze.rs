//! Generate one random maze and solve it with UCS and A*.
//!
//! Run: cargo run --bin maze -- --seed 7

use clap::Parser;
use lattice_bench::DEFAULT_TIME_DIVISOR;
use lattice_demos::{describe_result, init_logging};
use lattice_maze::{MazeConfig, generate_maze, render};
use lattice_paths::{Algorithm, Searcher};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(name = "maze", version, about = "Solve a random lattice maze with UCS and A*")]
struct Args {
    /// Seed for the maze generator; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 6)]
    cols: usize,

    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Number of barrier cells.
    #[arg(long, default_value_t = 4)]
    barriers: usize,

    /// Solve with a single algorithm (ucs or astar) instead of both.
    #[arg(long)]
    algorithm: Option<Algorithm>,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("maze seed {seed}");

    let config = MazeConfig::with_size(args.cols, args.rows, args.barriers);
    let maze = generate_maze(&config, &mut ChaCha8Rng::seed_from_u64(seed))?;

    println!("{}", render::render_summary(&maze));
    println!("\nMaze Layout ({}):\n", maze.lattice());
    println!("{}\n", render::render_layout(&maze));

    let algorithms = match args.algorithm {
        Some(a) => vec![a],
        None => Algorithm::ALL.to_vec(),
    };
    let mut searcher = Searcher::for_lattice(&maze.lattice());
    for algorithm in algorithms {
        let result = searcher.search(algorithm, &maze, maze.start(), maze.goal());
        println!("{}", describe_result(&maze, &result, DEFAULT_TIME_DIVISOR));
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
