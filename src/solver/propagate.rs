//! Arc-consistency propagation (AC-3) over the row/column domains.
//!
//! Each arc is a (row, column) pair; revising an arc removes row candidates
//! that no column candidate supports at the crossing cell. Removals re-queue
//! the arcs incident to the revised row and column, and the worklist drains
//! to either a fixpoint or a contradiction (an emptied domain).
//!
//! The revision is deliberately asymmetric: row domains are pruned in place
//! while column domains only act as support, since search branches on rows.
//! Column domains still cause contradictions when they are empty, because no
//! row candidate can find support in them.

use tracing::{debug, trace};

use crate::solver::{domains::DomainSet, stats::SearchStats, work_list::WorkList};

/// Runs AC-3 to a fixpoint. Returns `false` if a contradiction was found (a
/// domain became, or already was, empty), in which case the puzzle has no
/// solution and no search is needed.
pub fn propagate(domains: &mut DomainSet, stats: &mut SearchStats) -> bool {
    // A clue that never fit its line produces an empty domain before any
    // propagation happens; surface that as a contradiction here rather than
    // letting the worklist drain vacuously.
    if let Some(row) = domains.rows.iter().position(|d| d.is_empty()) {
        debug!(row, "row domain empty before propagation");
        return false;
    }
    if let Some(col) = domains.cols.iter().position(|d| d.is_empty()) {
        debug!(col, "column domain empty before propagation");
        return false;
    }

    let (height, width) = (domains.height(), domains.width());
    let mut worklist = WorkList::all_arcs(height, width);

    while let Some((row, col)) = worklist.pop_front() {
        stats.revisions += 1;
        let removed = revise(domains, row, col);
        if removed == 0 {
            continue;
        }
        stats.prunings += removed as u64;
        trace!(row, col, removed, "revised row domain");

        if domains.rows[row].is_empty() {
            debug!(row, col, "row domain emptied, contradiction");
            return false;
        }

        // Supports may have changed for every arc touching this row or
        // this column.
        for other_row in (0..height).filter(|&r| r != row) {
            worklist.push_back((other_row, col));
        }
        for other_col in (0..width).filter(|&c| c != col) {
            worklist.push_back((row, other_col));
        }
    }

    debug!("propagation reached a fixpoint");
    true
}

/// Removes candidates of `row` with no support in `col`'s domain at the
/// crossing cell, returning how many were removed.
///
/// A row candidate is supported iff some column candidate agrees with it at
/// cell (row, col). Since agreement only depends on the bit value there, the
/// column domain collapses to "does any candidate leave the cell empty /
/// filled", computed once per revision.
fn revise(domains: &mut DomainSet, row: usize, col: usize) -> usize {
    let mut supports_empty = false;
    let mut supports_filled = false;
    for candidate in domains.cols[col].iter() {
        if candidate.is_filled(row) {
            supports_filled = true;
        } else {
            supports_empty = true;
        }
        if supports_empty && supports_filled {
            break;
        }
    }

    domains.rows[row].retain(|line| {
        if line.is_filled(col) {
            supports_filled
        } else {
            supports_empty
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::puzzle::Puzzle;

    fn pruned(puzzle: &Puzzle) -> (DomainSet, SearchStats, bool) {
        let mut domains = DomainSet::build(puzzle);
        let mut stats = SearchStats::default();
        let ok = propagate(&mut domains, &mut stats);
        (domains, stats, ok)
    }

    #[test]
    fn contradictory_puzzle_is_detected_without_search() {
        // One row of three cells: the row clue [5] cannot fit, and the first
        // column clue sums to more than the single cell available.
        let puzzle =
            Puzzle::from_clues(vec![vec![5]], vec![vec![2], vec![1], vec![1]]).unwrap();
        let (_, _, ok) = pruned(&puzzle);
        assert!(!ok);
    }

    #[test]
    fn forced_cells_collapse_domains() {
        // Middle row and middle column are full; the unique solution is a
        // plus sign, and propagation alone pins every row.
        let puzzle = Puzzle::from_clues(
            vec![vec![1], vec![3], vec![1]],
            vec![vec![1], vec![3], vec![1]],
        )
        .unwrap();
        let (domains, stats, ok) = pruned(&puzzle);
        assert!(ok);
        assert!(stats.prunings > 0);
        assert!(domains.rows.iter().all(|d| d.len() == 1));
    }

    #[test]
    fn pruning_never_discards_solution_rows() {
        let puzzle = Puzzle::from_clues(
            vec![vec![3], vec![2, 1], vec![2, 2], vec![1], vec![2]],
            vec![vec![4], vec![3, 1], vec![1], vec![3], vec![1]],
        )
        .unwrap();
        let (domains, _, ok) = pruned(&puzzle);
        assert!(ok);

        let solution_rows = ["01110", "11010", "11011", "10000", "11000"];
        for (r, cells) in solution_rows.iter().enumerate() {
            let line = crate::puzzle::Line::from_cells(
                &cells.chars().map(|c| c == '1').collect::<Vec<_>>(),
            );
            assert!(domains.rows[r].contains(&line), "row {r} lost its solution");
        }
    }

    #[test]
    fn propagation_is_a_fixpoint() {
        let puzzle = Puzzle::from_clues(
            vec![vec![3], vec![2, 1], vec![2, 2], vec![1], vec![2]],
            vec![vec![4], vec![3, 1], vec![1], vec![3], vec![1]],
        )
        .unwrap();
        let (mut domains, _, ok) = pruned(&puzzle);
        assert!(ok);

        let mut stats = SearchStats::default();
        assert!(propagate(&mut domains, &mut stats));
        assert_eq!(stats.prunings, 0);
    }
}
