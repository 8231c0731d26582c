//! Conflict-directed backjumping.
//!
//! Instead of reporting a bare failure, a dead-end subtree reports the set of
//! earlier row assignments responsible for it. An ancestor absent from that
//! set cannot repair the failure by trying other candidates, so the unwind
//! jumps straight past it.

use tracing::debug;

use crate::{
    puzzle::{Grid, Puzzle},
    solver::{
        assignment::{Assignment, ColumnViolation},
        domains::DomainSet,
        stats::SearchStats,
    },
};

/// Row indices jointly responsible for a dead end.
pub type ConflictSet = im::HashSet<usize>;

/// Result of searching one subtree: a finished grid, or the rows to blame.
#[derive(Debug, Clone)]
pub enum Outcome {
    Solved(Grid),
    Failed(ConflictSet),
}

/// Backtracking search that unwinds by conflict set rather than one level at
/// a time. Rows are selected lowest-index first.
#[derive(Debug)]
pub struct BackjumpingSearch<'a> {
    puzzle: &'a Puzzle,
    domains: &'a DomainSet,
}

impl<'a> BackjumpingSearch<'a> {
    pub fn new(puzzle: &'a Puzzle, domains: &'a DomainSet) -> Self {
        Self { puzzle, domains }
    }

    pub fn run(&self, stats: &mut SearchStats) -> Option<Grid> {
        let mut assignment = Assignment::new(self.domains.height(), self.domains.width());
        match self.search(&mut assignment, stats) {
            Outcome::Solved(grid) => {
                debug!(nodes = stats.nodes_visited, "backjumping search solved");
                Some(grid)
            }
            Outcome::Failed(conflicts) => {
                debug!(
                    nodes = stats.nodes_visited,
                    ?conflicts,
                    "backjumping search exhausted"
                );
                None
            }
        }
    }

    fn search(&self, assignment: &mut Assignment, stats: &mut SearchStats) -> Outcome {
        let Some(row) = (0..assignment.height()).find(|&r| !assignment.is_assigned(r)) else {
            let grid = assignment.to_grid();
            if self.puzzle.validate(&grid) {
                return Outcome::Solved(grid);
            }
            // A full but invalid grid gives no column bound to pin blame on;
            // every assigned row stays suspect so no ancestor is skipped
            // unsoundly.
            return Outcome::Failed((0..assignment.height()).collect());
        };

        let mut conflicts = ConflictSet::new();
        for &line in self.domains.rows[row].iter() {
            assignment.place(row, line);

            let violated = assignment.violated_columns(self.puzzle);
            if !violated.is_empty() {
                conflicts = conflicts.union(conflict_rows(assignment, row, &violated));
                assignment.retract(row);
                continue;
            }

            stats.nodes_visited += 1;
            match self.search(assignment, stats) {
                Outcome::Solved(grid) => return Outcome::Solved(grid),
                Outcome::Failed(child_conflicts) => {
                    assignment.retract(row);
                    stats.backtracks += 1;
                    if !child_conflicts.contains(&row) {
                        // No candidate change at this row could affect the
                        // failure below; jump past it.
                        stats.backjumps += 1;
                        return Outcome::Failed(child_conflicts);
                    }
                    conflicts = conflicts.union(child_conflicts.without(&row));
                }
            }
        }

        Outcome::Failed(conflicts)
    }
}

/// The earlier rows responsible for the violated columns.
///
/// An over-filled column blames the assigned rows whose filled cells feed
/// it. An over-grouped column blames every row in the counted prefix: a row
/// whose empty cell splits the run is as responsible as the filled rows
/// around it, and leaving it out would let the unwind jump past a row whose
/// other candidates could still repair the failure.
fn conflict_rows(
    assignment: &Assignment,
    failing_row: usize,
    violated: &[ColumnViolation],
) -> ConflictSet {
    let prefix = assignment.assigned_prefix_len();
    let mut conflicts = ConflictSet::new();
    for violation in violated {
        for r in (0..assignment.height()).filter(|&r| r != failing_row) {
            let Some(line) = assignment.get(r) else {
                continue;
            };
            if violation.over_filled && line.is_filled(violation.col) {
                conflicts.insert(r);
            }
            if violation.over_grouped && r < prefix {
                conflicts.insert(r);
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{heuristics::SelectFirst, search::BacktrackingSearch};

    fn grid_rows(grid: &Grid) -> Vec<String> {
        grid.rows()
            .iter()
            .map(|line| {
                line.cells()
                    .map(|filled| if filled { '1' } else { '0' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn solves_the_five_by_five_like_plain_backtracking() {
        let puzzle = Puzzle::from_clues(
            vec![vec![3], vec![2, 1], vec![2, 2], vec![1], vec![2]],
            vec![vec![4], vec![3, 1], vec![1], vec![3], vec![1]],
        )
        .unwrap();
        let domains = DomainSet::build(&puzzle);
        let mut stats = SearchStats::default();
        let grid = BackjumpingSearch::new(&puzzle, &domains)
            .run(&mut stats)
            .expect("puzzle is satisfiable");
        assert_eq!(
            grid_rows(&grid),
            vec!["01110", "11010", "11011", "10000", "11000"]
        );
    }

    #[test]
    fn unsatisfiable_puzzle_fails_with_no_more_expansions_than_plain() {
        // Satisfiable per-line clues, jointly unsatisfiable: row totals 4,
        // column totals 5.
        let puzzle = Puzzle::from_clues(
            vec![vec![1], vec![1], vec![1], vec![1]],
            vec![vec![2], vec![1], vec![1], vec![1]],
        )
        .unwrap();
        let domains = DomainSet::build(&puzzle);

        let mut plain_stats = SearchStats::default();
        let plain = BacktrackingSearch::new(&puzzle, &domains, Box::new(SelectFirst))
            .run(&mut plain_stats);
        assert!(plain.is_none());

        let mut jump_stats = SearchStats::default();
        let jumped = BackjumpingSearch::new(&puzzle, &domains).run(&mut jump_stats);
        assert!(jumped.is_none());

        assert!(jump_stats.nodes_visited <= plain_stats.nodes_visited);
    }

    #[test]
    fn over_filled_columns_blame_their_fillers() {
        let puzzle = Puzzle::from_clues(
            vec![vec![1], vec![1], vec![1]],
            vec![vec![1], vec![1], vec![1]],
        )
        .unwrap();
        let mut asg = Assignment::new(3, 3);
        let fill_col0 = crate::puzzle::Line::from_cells(&[true, false, false]);
        asg.place(0, fill_col0);
        asg.place(1, fill_col0);

        // Column 0 is over capacity as one contiguous run: row 0 is blamed,
        // the failing row itself and the unassigned row 2 are not.
        let violated = asg.violated_columns(&puzzle);
        assert!(violated[0].over_filled && !violated[0].over_grouped);
        let conflicts = conflict_rows(&asg, 1, &violated);
        assert!(conflicts.contains(&0));
        assert!(!conflicts.contains(&1));
        assert!(!conflicts.contains(&2));
    }

    #[test]
    fn split_runs_blame_the_separating_row() {
        // Column clue [3]: rows 0 and 2 filled with row 1 empty makes two
        // runs. The empty middle row must be blamed too, or the unwind
        // would jump past it without trying its filled candidate.
        let puzzle =
            Puzzle::from_clues(vec![vec![1], vec![0], vec![1]], vec![vec![3]]).unwrap();
        let mut asg = Assignment::new(3, 1);
        asg.place(0, crate::puzzle::Line::from_cells(&[true]));
        asg.place(1, crate::puzzle::Line::from_cells(&[false]));
        asg.place(2, crate::puzzle::Line::from_cells(&[true]));

        let violated = asg.violated_columns(&puzzle);
        assert!(violated[0].over_grouped);
        let conflicts = conflict_rows(&asg, 2, &violated);
        assert!(conflicts.contains(&0));
        assert!(conflicts.contains(&1));
        assert!(!conflicts.contains(&2));
    }

    #[test]
    fn split_run_dead_end_does_not_skip_the_separating_row() {
        // Satisfiable: the unconstrained middle row must be filled to give
        // the column its single run of three. The first dead end (middle
        // row empty) must unwind to that row, not jump past it.
        let puzzle =
            Puzzle::from_clues(vec![vec![1], vec![0], vec![1]], vec![vec![3]]).unwrap();
        let domains = DomainSet::build(&puzzle);
        let mut stats = SearchStats::default();
        let grid = BackjumpingSearch::new(&puzzle, &domains)
            .run(&mut stats)
            .expect("puzzle is satisfiable");
        assert_eq!(grid_rows(&grid), vec!["1", "1", "1"]);
    }
}
