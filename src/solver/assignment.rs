//! The partial assignment mutated in place by the search engines.
//!
//! Rows are placed and retracted with strict push/pop discipline: every
//! failure path retracts exactly what it placed, so an assignment observed
//! after a failed search is identical to what it was before.

use crate::puzzle::{Clue, Grid, Line, Puzzle};

/// A column upper bound exceeded by the current assignment. Both bounds can
/// break at once; the flags are kept separate because they spread blame
/// differently in backjumping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnViolation {
    pub col: usize,
    /// More filled cells than the clue's total.
    pub over_filled: bool,
    /// More runs in the assigned prefix than the clue has.
    pub over_grouped: bool,
}

/// A mapping from row index to a chosen [`Line`], plus the running per-column
/// filled counts kept incrementally so the column-capacity check is cheap.
#[derive(Debug, Clone)]
pub struct Assignment {
    rows: Vec<Option<Line>>,
    col_fill: Vec<u32>,
    assigned: usize,
}

impl Assignment {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            rows: vec![None; height],
            col_fill: vec![0; width],
            assigned: 0,
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.col_fill.len()
    }

    pub fn get(&self, row: usize) -> Option<Line> {
        self.rows[row]
    }

    pub fn is_assigned(&self, row: usize) -> bool {
        self.rows[row].is_some()
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned
    }

    pub fn is_complete(&self) -> bool {
        self.assigned == self.rows.len()
    }

    /// Tentatively commits `line` to `row`. The row must be unassigned.
    pub fn place(&mut self, row: usize, line: Line) {
        debug_assert!(self.rows[row].is_none());
        for c in 0..self.width() {
            if line.is_filled(c) {
                self.col_fill[c] += 1;
            }
        }
        self.rows[row] = Some(line);
        self.assigned += 1;
    }

    /// Retracts the assignment previously placed at `row`.
    pub fn retract(&mut self, row: usize) {
        let line = self.rows[row].take().expect("retracting an unassigned row");
        for c in 0..self.width() {
            if line.is_filled(c) {
                self.col_fill[c] -= 1;
            }
        }
        self.assigned -= 1;
    }

    /// Number of rows assigned contiguously from the top. Column run counting
    /// is only meaningful over this prefix: below the first gap, cells are
    /// unknown rather than empty.
    pub(crate) fn assigned_prefix_len(&self) -> usize {
        self.rows
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.rows.len())
    }

    /// Contiguous filled runs in column `c` over the assigned prefix.
    fn prefix_run_count(&self, c: usize, prefix: usize) -> usize {
        let mut runs = 0;
        let mut in_run = false;
        for row in &self.rows[..prefix] {
            let filled = row.map_or(false, |line| line.is_filled(c));
            if filled && !in_run {
                runs += 1;
            }
            in_run = filled;
        }
        runs
    }

    /// Columns whose clue upper bounds are already exceeded by the current
    /// assignment: either more filled cells than the clue's total, or more
    /// runs in the assigned prefix than the clue has. Both bounds are sound
    /// under any row-selection order, since placing further rows can only
    /// raise them.
    ///
    /// An empty result is the local consistency check of the search engines;
    /// the non-empty case records which bound broke per column, which is
    /// what the backjumping engine derives conflict sets from.
    pub fn violated_columns(&self, puzzle: &Puzzle) -> Vec<ColumnViolation> {
        let prefix = self.assigned_prefix_len();
        (0..self.width())
            .filter_map(|c| {
                let Clue::Runs(runs) = puzzle.col_clue(c) else {
                    return None;
                };
                let total: u32 = runs.iter().sum();
                let over_filled = self.col_fill[c] > total;
                let over_grouped = self.prefix_run_count(c, prefix) > runs.len();
                (over_filled || over_grouped).then_some(ColumnViolation {
                    col: c,
                    over_filled,
                    over_grouped,
                })
            })
            .collect()
    }

    /// Converts a complete assignment into a [`Grid`].
    pub fn to_grid(&self) -> Grid {
        debug_assert!(self.is_complete());
        Grid::from_rows(
            self.rows
                .iter()
                .map(|row| row.expect("assignment is complete"))
                .collect(),
        )
    }
}
