use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use linecross::{
    generate,
    puzzle::Puzzle,
    solver::{
        engine::{SearchStrategy, Solver},
        stats::render_stats_table,
    },
};

#[derive(Debug, Parser)]
#[command(name = "linecross", about = "Solve nonogram puzzles", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Search variant to use.
    #[arg(long, value_enum, default_value = "backtracking", global = true)]
    strategy: SearchStrategy,

    /// Skip AC-3 pre-pruning before the search.
    #[arg(long, global = true)]
    no_propagation: bool,

    /// Print search statistics after solving.
    #[arg(long, global = true)]
    stats: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a puzzle from a JSON file: {"rows": [[3],[2,1],...], "cols": [...]}.
    Solve {
        /// Path to the puzzle file.
        puzzle: PathBuf,
    },
    /// Generate a random satisfiable puzzle and solve it.
    Random {
        height: usize,
        width: usize,
        /// Probability that a generated cell is filled.
        #[arg(long, default_value_t = 0.5)]
        density: f64,
        /// Seed for reproducible generation.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let puzzle = match &cli.command {
        Command::Solve { puzzle } => {
            let contents = fs::read_to_string(puzzle)?;
            serde_json::from_str::<Puzzle>(&contents)?
        }
        Command::Random {
            height,
            width,
            density,
            seed,
        } => {
            let (puzzle, _) = generate::random_puzzle(*height, *width, *density, *seed)?;
            println!("{}", serde_json::to_string(&puzzle)?);
            puzzle
        }
    };

    let solver = Solver::new(puzzle)
        .with_strategy(cli.strategy)
        .with_propagation(!cli.no_propagation);
    let (solution, stats) = solver.solve();

    match solution {
        Some(grid) => print!("{grid}"),
        None => println!("no solution"),
    }
    if cli.stats {
        println!("{}", render_stats_table(&stats));
    }
    Ok(())
}
