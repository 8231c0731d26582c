//! Linecross is a nonogram (picture logic puzzle) constraint-satisfaction
//! solver.
//!
//! A puzzle is a grid described only by its clues: for every row and column,
//! the ordered lengths of the contiguous filled runs that must appear there.
//! The engine models each row as a variable whose domain is the set of whole
//! lines consistent with that row's clue, prunes the domains with AC-3
//! arc-consistency propagation against the column domains, and then searches
//! the remaining space with one of several depth-first strategies.
//!
//! # Core Concepts
//!
//! - **[`Puzzle`](puzzle::Puzzle)**: the immutable clue sets, plus whole-grid
//!   validation.
//! - **[`DomainSet`](solver::domains::DomainSet)**: per-line candidate
//!   domains, enumerated once from the clues.
//! - **[`Solver`](solver::engine::Solver)**: AC-3 pre-pruning plus a choice
//!   of search variant: plain backtracking, MRV-ordered backtracking,
//!   conflict-directed backjumping, or iterative deepening.
//!
//! # Example
//!
//! ```
//! use linecross::puzzle::Puzzle;
//! use linecross::solver::engine::{SearchStrategy, Solver};
//!
//! // Clues are run-length lists; [0] marks an unconstrained line.
//! let puzzle = Puzzle::from_clues(
//!     vec![vec![3], vec![2, 1], vec![2, 2], vec![1], vec![2]],
//!     vec![vec![4], vec![3, 1], vec![1], vec![3], vec![1]],
//! )
//! .unwrap();
//!
//! let solver = Solver::new(puzzle).with_strategy(SearchStrategy::Backjumping);
//! let (solution, stats) = solver.solve();
//!
//! let grid = solution.expect("this puzzle has a unique solution");
//! assert!(solver.puzzle().validate(&grid));
//! assert!(stats.nodes_visited > 0);
//! println!("{grid}");
//! ```

pub mod error;
pub mod generate;
pub mod puzzle;
pub mod solver;
