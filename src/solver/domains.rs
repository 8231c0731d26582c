//! Per-line candidate domains, built once from the clues alone.
//!
//! Every row and column starts with the full `2^len` enumeration of its
//! cells, filtered down to the lines whose run-length decomposition equals
//! the clue. This is the dominant cost of construction; everything downstream
//! (propagation, search ordering) exists to avoid paying exponential cost a
//! second time.

use crate::puzzle::{Clue, Line, Puzzle};

/// The ordered set of candidate [`Line`]s still considered possible for one
/// row or column.
///
/// Candidates are kept in binary counting order (bitmasks ascending, cell 0
/// most significant), so iteration order is deterministic given the inputs.
/// Pruning only ever removes candidates.
#[derive(Debug, Clone)]
pub struct LineDomain {
    candidates: Vec<Line>,
}

impl LineDomain {
    /// Enumerates all `2^len` lines and keeps exactly those matching `clue`.
    ///
    /// A clue that cannot fit in `len` cells simply produces an empty domain,
    /// which the solver reports as "no solution"; it is not an error.
    pub fn generate(len: usize, clue: &Clue) -> Self {
        let candidates = (0u32..1 << len)
            .map(|bits| Line::from_bits(bits, len))
            .filter(|line| clue.matches(&line.run_lengths()))
            .collect();
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.candidates.iter()
    }

    pub fn contains(&self, line: &Line) -> bool {
        self.candidates.contains(line)
    }

    /// Drops every candidate failing the predicate, returning how many were
    /// removed.
    pub fn retain(&mut self, keep: impl FnMut(&Line) -> bool) -> usize {
        let before = self.candidates.len();
        let mut keep = keep;
        self.candidates.retain(|line| keep(line));
        before - self.candidates.len()
    }
}

/// The full domain state of one solve: a domain per row and per column.
///
/// Owned by a single solver run and passed explicitly, never shared; cloning
/// the set gives a fresh solve an untouched starting point.
#[derive(Debug, Clone)]
pub struct DomainSet {
    pub rows: Vec<LineDomain>,
    pub cols: Vec<LineDomain>,
}

impl DomainSet {
    pub fn build(puzzle: &Puzzle) -> Self {
        let rows = puzzle
            .row_clues()
            .iter()
            .map(|clue| LineDomain::generate(puzzle.width(), clue))
            .collect();
        let cols = puzzle
            .col_clues()
            .iter()
            .map(|clue| LineDomain::generate(puzzle.height(), clue))
            .collect();
        Self { rows, cols }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.cols.len()
    }
}
