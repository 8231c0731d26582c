//! The solving engine: domain construction, optional AC-3 pre-pruning, and
//! dispatch to the selected search variant.

use clap::ValueEnum;
use tracing::debug;

use crate::{
    puzzle::{Grid, Puzzle},
    solver::{
        backjump::BackjumpingSearch,
        deepening::IterativeDeepening,
        domains::DomainSet,
        heuristics::{MinimumRemainingValues, SelectFirst},
        propagate::propagate,
        search::BacktrackingSearch,
        stats::SearchStats,
    },
};

/// Which search variant explores the candidate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchStrategy {
    /// Plain backtracking, rows in index order.
    Backtracking,
    /// Backtracking ordered by minimum remaining values.
    MrvBacktracking,
    /// Conflict-directed backjumping.
    Backjumping,
    /// Iterative deepening over the depth of committed rows.
    IterativeDeepening,
}

/// Solves one [`Puzzle`].
///
/// Construction enumerates and filters the per-line candidate domains once;
/// each [`solve`](Solver::solve) call works on its own copy of them, so a
/// solver can be reused (or re-run with a different strategy) without one
/// solve contaminating another.
///
/// Memory is bounded by `O(2^len)` transiently during domain generation and
/// by the filtered domain sizes afterwards; line length is capped at
/// [`MAX_LINE_LEN`](crate::puzzle::MAX_LINE_LEN) accordingly.
#[derive(Debug, Clone)]
pub struct Solver {
    puzzle: Puzzle,
    domains: DomainSet,
    strategy: SearchStrategy,
    propagate: bool,
}

impl Solver {
    pub fn new(puzzle: Puzzle) -> Self {
        let domains = DomainSet::build(&puzzle);
        Self {
            puzzle,
            domains,
            strategy: SearchStrategy::Backtracking,
            propagate: true,
        }
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables AC-3 pre-pruning (on by default).
    pub fn with_propagation(mut self, propagate: bool) -> Self {
        self.propagate = propagate;
        self
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Solves the puzzle. `None` means "no solution exists", which is a
    /// valid terminal answer for an unsatisfiable puzzle, never an error. A
    /// returned grid always satisfies every clue; a partial grid is never
    /// returned.
    pub fn solve(&self) -> (Option<Grid>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut domains = self.domains.clone();

        if self.propagate && !propagate(&mut domains, &mut stats) {
            debug!("propagation detected a contradiction, skipping search");
            return (None, stats);
        }

        let found = match self.strategy {
            SearchStrategy::Backtracking => {
                BacktrackingSearch::new(&self.puzzle, &domains, Box::new(SelectFirst))
                    .run(&mut stats)
            }
            SearchStrategy::MrvBacktracking => BacktrackingSearch::new(
                &self.puzzle,
                &domains,
                Box::new(MinimumRemainingValues),
            )
            .run(&mut stats),
            SearchStrategy::Backjumping => {
                BackjumpingSearch::new(&self.puzzle, &domains).run(&mut stats)
            }
            SearchStrategy::IterativeDeepening => {
                IterativeDeepening::new(&self.puzzle, &domains).run(&mut stats)
            }
        };
        (found, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_by_five() -> Puzzle {
        Puzzle::from_clues(
            vec![vec![3], vec![2, 1], vec![2, 2], vec![1], vec![2]],
            vec![vec![4], vec![3, 1], vec![1], vec![3], vec![1]],
        )
        .unwrap()
    }

    #[test]
    fn propagation_short_circuits_contradictions() {
        let puzzle =
            Puzzle::from_clues(vec![vec![5]], vec![vec![2], vec![1], vec![1]]).unwrap();
        let solver = Solver::new(puzzle);
        let (found, stats) = solver.solve();
        assert!(found.is_none());
        assert_eq!(stats.nodes_visited, 0, "no search should run");
    }

    #[test]
    fn solver_reuse_is_clean_across_strategies() {
        let solver = Solver::new(five_by_five());
        let (first, _) = solver.solve();
        let (second, _) = solver
            .clone()
            .with_strategy(SearchStrategy::Backjumping)
            .solve();
        assert_eq!(first, second);
    }

    #[test]
    fn propagation_toggle_does_not_change_the_answer() {
        let with = Solver::new(five_by_five());
        let without = Solver::new(five_by_five()).with_propagation(false);
        let (a, _) = with.solve();
        let (b, _) = without.solve();
        assert_eq!(a, b);
    }
}
