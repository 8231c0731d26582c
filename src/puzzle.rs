//! The puzzle model: clues, lines, grids, and whole-grid validation.
//!
//! A nonogram is described entirely by its clues. Each clue lists the lengths
//! of the contiguous filled runs that must appear in one row or column, in
//! order, separated by at least one empty cell. The solver never sees cells
//! directly; it works with whole-line candidates drawn from clue-filtered
//! domains.

use serde::{Deserialize, Serialize};

use crate::error::{Error, LineKind, Result};

/// Hard cap on row/column length.
///
/// Candidate domains are built by enumerating all `2^len` assignments of a
/// line, so memory and time are exponential in line length. Puzzles with
/// longer lines are rejected at construction rather than failing obscurely
/// later.
pub const MAX_LINE_LEN: usize = 20;

/// The constraint on a single row or column.
///
/// The original puzzle format uses a clue of `[0]` to mean "no constraint";
/// that sentinel is folded into an explicit variant at the conversion
/// boundary so the rest of the engine never has to special-case it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Clue {
    /// Ordered lengths of the contiguous filled runs, left-to-right or
    /// top-to-bottom. Always non-empty, every run positive.
    Runs(Vec<u32>),
    /// The line may be anything.
    Unconstrained,
}

impl Clue {
    /// True if `runs` (the run-length decomposition of a full line) satisfies
    /// this clue.
    pub fn matches(&self, runs: &[u32]) -> bool {
        match self {
            Clue::Runs(expected) => expected == runs,
            Clue::Unconstrained => true,
        }
    }

    /// Total number of filled cells the clue demands, or `None` when
    /// unconstrained.
    pub fn filled_total(&self) -> Option<u32> {
        match self {
            Clue::Runs(runs) => Some(runs.iter().sum()),
            Clue::Unconstrained => None,
        }
    }

    /// Number of runs the clue demands, or `None` when unconstrained.
    pub fn run_count(&self) -> Option<usize> {
        match self {
            Clue::Runs(runs) => Some(runs.len()),
            Clue::Unconstrained => None,
        }
    }

    fn check(&self, kind: LineKind, index: usize) -> Result<()> {
        if let Clue::Runs(runs) = self {
            if runs.is_empty() {
                return Err(Error::EmptyClue { kind, index });
            }
            if runs.contains(&0) {
                return Err(Error::ZeroRun { kind, index });
            }
        }
        Ok(())
    }
}

impl From<Vec<u32>> for Clue {
    fn from(runs: Vec<u32>) -> Self {
        if runs == [0] {
            Clue::Unconstrained
        } else {
            Clue::Runs(runs)
        }
    }
}

impl From<Clue> for Vec<u32> {
    fn from(clue: Clue) -> Self {
        match clue {
            Clue::Runs(runs) => runs,
            Clue::Unconstrained => vec![0],
        }
    }
}

/// One fully-assigned row or column, stored as a bitmask.
///
/// Cell `0` is the most significant bit, so enumerating masks in increasing
/// numeric order visits lines in binary counting order with the leftmost
/// cell varying slowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    bits: u32,
    len: u8,
}

impl Line {
    pub(crate) fn from_bits(bits: u32, len: usize) -> Self {
        debug_assert!(len <= MAX_LINE_LEN);
        Self { bits, len: len as u8 }
    }

    /// The all-empty line.
    pub fn empty(len: usize) -> Self {
        Self::from_bits(0, len)
    }

    pub fn from_cells(cells: &[bool]) -> Self {
        let mut bits = 0u32;
        for &filled in cells {
            bits = (bits << 1) | u32::from(filled);
        }
        Self::from_bits(bits, cells.len())
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether cell `i` (counting from the left / top) is filled.
    pub fn is_filled(&self, i: usize) -> bool {
        debug_assert!(i < self.len());
        (self.bits >> (self.len() - 1 - i)) & 1 == 1
    }

    pub fn filled_count(&self) -> u32 {
        self.bits.count_ones()
    }

    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.is_filled(i))
    }

    /// The contiguous-filled-run decomposition of the line.
    pub fn run_lengths(&self) -> Vec<u32> {
        let mut runs = Vec::new();
        let mut current = 0u32;
        for filled in self.cells() {
            if filled {
                current += 1;
            } else if current > 0 {
                runs.push(current);
                current = 0;
            }
        }
        if current > 0 {
            runs.push(current);
        }
        runs
    }
}

/// A candidate solution: one [`Line`] per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Line>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Line>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[Line] {
        &self.rows
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows[row].is_filled(col)
    }

    /// Column `c` read top-to-bottom as a [`Line`] of length `height`.
    pub fn column(&self, c: usize) -> Line {
        let mut bits = 0u32;
        for row in &self.rows {
            bits = (bits << 1) | u32::from(row.is_filled(c));
        }
        Line::from_bits(bits, self.height())
    }
}

/// Text-art rendering: `#` filled, `.` empty, one row per output line. This
/// is a presentation convenience layered on top of the solved grid, not part
/// of the engine contract.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            for filled in row.cells() {
                f.write_str(if filled { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Serialization shape: the raw clue lists of the original puzzle format,
/// `[0]` sentinel included. Round-tripping through this struct runs the
/// constructor's validation on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPuzzle {
    rows: Vec<Vec<u32>>,
    cols: Vec<Vec<u32>>,
}

/// An immutable nonogram: one clue per row and one per column.
///
/// The row count and column count are exactly the lengths of the two clue
/// lists; there is no separate dimension declaration to fall out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPuzzle", into = "RawPuzzle")]
pub struct Puzzle {
    rows: Vec<Clue>,
    cols: Vec<Clue>,
}

impl Puzzle {
    pub fn new(rows: Vec<Clue>, cols: Vec<Clue>) -> Result<Self> {
        if rows.is_empty() || cols.is_empty() {
            return Err(Error::EmptyPuzzle);
        }
        // Rows are `cols.len()` cells long and vice versa.
        if cols.len() > MAX_LINE_LEN {
            return Err(Error::LineTooLong {
                kind: LineKind::Row,
                len: cols.len(),
            });
        }
        if rows.len() > MAX_LINE_LEN {
            return Err(Error::LineTooLong {
                kind: LineKind::Column,
                len: rows.len(),
            });
        }
        for (i, clue) in rows.iter().enumerate() {
            clue.check(LineKind::Row, i)?;
        }
        for (i, clue) in cols.iter().enumerate() {
            clue.check(LineKind::Column, i)?;
        }
        Ok(Self { rows, cols })
    }

    /// Builds a puzzle from raw run-length lists, mapping the `[0]` sentinel
    /// to [`Clue::Unconstrained`].
    pub fn from_clues(rows: Vec<Vec<u32>>, cols: Vec<Vec<u32>>) -> Result<Self> {
        Self::new(
            rows.into_iter().map(Clue::from).collect(),
            cols.into_iter().map(Clue::from).collect(),
        )
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.cols.len()
    }

    pub fn row_clue(&self, r: usize) -> &Clue {
        &self.rows[r]
    }

    pub fn col_clue(&self, c: usize) -> &Clue {
        &self.cols[c]
    }

    pub fn row_clues(&self) -> &[Clue] {
        &self.rows
    }

    pub fn col_clues(&self) -> &[Clue] {
        &self.cols
    }

    /// True iff every row and every column of `grid` decomposes to exactly
    /// its clue. Pure: the grid is never mutated and repeated calls agree.
    ///
    /// Passing a grid whose dimensions do not match the puzzle is a caller
    /// contract violation.
    pub fn validate(&self, grid: &Grid) -> bool {
        debug_assert_eq!(grid.height(), self.height());
        debug_assert_eq!(grid.width(), self.width());

        self.rows
            .iter()
            .zip(grid.rows())
            .all(|(clue, line)| clue.matches(&line.run_lengths()))
            && self
                .cols
                .iter()
                .enumerate()
                .all(|(c, clue)| clue.matches(&grid.column(c).run_lengths()))
    }
}

impl TryFrom<RawPuzzle> for Puzzle {
    type Error = Error;

    fn try_from(raw: RawPuzzle) -> Result<Self> {
        Puzzle::from_clues(raw.rows, raw.cols)
    }
}

impl From<Puzzle> for RawPuzzle {
    fn from(puzzle: Puzzle) -> Self {
        RawPuzzle {
            rows: puzzle.rows.into_iter().map(Vec::from).collect(),
            cols: puzzle.cols.into_iter().map(Vec::from).collect(),
        }
    }
}
