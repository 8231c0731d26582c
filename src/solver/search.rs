//! Backtracking search over whole-row assignments.
//!
//! One state per partial assignment: the engine picks an unassigned row,
//! tries each candidate from the row's pruned domain in domain order, checks
//! the column upper bounds, and recurses. Failed branches retract their
//! placement before returning, so the assignment unwinds cleanly.

use tracing::debug;

use crate::{
    puzzle::{Grid, Puzzle},
    solver::{
        assignment::Assignment,
        domains::DomainSet,
        heuristics::RowSelection,
        stats::SearchStats,
    },
};

/// Depth-first backtracking over row assignments, with a pluggable
/// row-selection heuristic and an optional depth cutoff for the
/// iterative-deepening driver.
#[derive(Debug)]
pub struct BacktrackingSearch<'a> {
    puzzle: &'a Puzzle,
    domains: &'a DomainSet,
    heuristic: Box<dyn RowSelection>,
    depth_limit: Option<usize>,
}

impl<'a> BacktrackingSearch<'a> {
    pub fn new(
        puzzle: &'a Puzzle,
        domains: &'a DomainSet,
        heuristic: Box<dyn RowSelection>,
    ) -> Self {
        Self {
            puzzle,
            domains,
            heuristic,
            depth_limit: None,
        }
    }

    /// Fail any state that has committed more than `limit` rows.
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    /// Runs the search from an empty assignment.
    pub fn run(&self, stats: &mut SearchStats) -> Option<Grid> {
        let mut assignment = Assignment::new(self.domains.height(), self.domains.width());
        let found = self.search(&mut assignment, stats);
        debug!(
            found = found.is_some(),
            nodes = stats.nodes_visited,
            "backtracking search finished"
        );
        found
    }

    fn search(&self, assignment: &mut Assignment, stats: &mut SearchStats) -> Option<Grid> {
        let Some(row) = self.heuristic.select(assignment, self.domains) else {
            // Complete assignment; rows satisfy their clues by construction,
            // the full validation settles the columns.
            let grid = assignment.to_grid();
            return self.puzzle.validate(&grid).then_some(grid);
        };

        // Cut off without expanding once committing another row would push
        // the assignment past the depth bound.
        if let Some(limit) = self.depth_limit {
            if assignment.assigned_count() >= limit {
                return None;
            }
        }

        for &line in self.domains.rows[row].iter() {
            assignment.place(row, line);
            if assignment.violated_columns(self.puzzle).is_empty() {
                stats.nodes_visited += 1;
                if let Some(grid) = self.search(assignment, stats) {
                    return Some(grid);
                }
                stats.backtracks += 1;
            }
            assignment.retract(row);
        }
        None
    }
}
