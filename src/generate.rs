//! Seeded random puzzle generation, for benchmarks, property tests, and the
//! CLI's `random` subcommand.
//!
//! Puzzles are generated backwards: draw a random grid, then read its clues
//! off. Every puzzle produced this way is satisfiable by construction
//! (though not necessarily uniquely).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    error::{Error, Result},
    puzzle::{Clue, Grid, Line, Puzzle},
};

/// Draws a `height x width` grid where each cell is filled with probability
/// `density`. The same seed always produces the same grid.
///
/// `density` must lie within `[0, 1]`; anything else (including NaN) is
/// rejected rather than handed to the generator, which panics on it.
pub fn random_grid(height: usize, width: usize, density: f64, seed: u64) -> Result<Grid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidDensity { density });
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows = (0..height)
        .map(|_| {
            let cells: Vec<bool> = (0..width).map(|_| rng.gen_bool(density)).collect();
            Line::from_cells(&cells)
        })
        .collect();
    Ok(Grid::from_rows(rows))
}

/// Reads the clues off a grid. A line with no filled cells gets the
/// unconstrained sentinel, matching the `[0]` convention of the puzzle
/// format.
pub fn clues_for_grid(grid: &Grid) -> Result<Puzzle> {
    let rows = grid
        .rows()
        .iter()
        .map(|line| clue_for_runs(line.run_lengths()))
        .collect();
    let cols = (0..grid.width())
        .map(|c| clue_for_runs(grid.column(c).run_lengths()))
        .collect();
    Puzzle::new(rows, cols)
}

/// A random satisfiable puzzle and the grid it was derived from.
pub fn random_puzzle(
    height: usize,
    width: usize,
    density: f64,
    seed: u64,
) -> Result<(Puzzle, Grid)> {
    let grid = random_grid(height, width, density, seed)?;
    let puzzle = clues_for_grid(&grid)?;
    Ok((puzzle, grid))
}

fn clue_for_runs(runs: Vec<u32>) -> Clue {
    if runs.is_empty() {
        Clue::Unconstrained
    } else {
        Clue::Runs(runs)
    }
}
