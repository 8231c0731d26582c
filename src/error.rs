use crate::puzzle::MAX_LINE_LEN;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Which dimension of the puzzle a clue or line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row,
    Column,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Row => write!(f, "row"),
            LineKind::Column => write!(f, "column"),
        }
    }
}

/// Construction-time failures.
///
/// These are the fail-fast cases: a puzzle that cannot even be represented.
/// An unsatisfiable but well-formed puzzle is not an error; it is reported as
/// a normal "no solution" result by
/// [`Solver::solve`](crate::solver::engine::Solver::solve).
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("puzzle must have at least one row clue and one column clue")]
    EmptyPuzzle,

    #[error("{kind} clue {index} is empty; use the [0] sentinel for an unconstrained line")]
    EmptyClue { kind: LineKind, index: usize },

    #[error("{kind} clue {index} contains a zero-length run")]
    ZeroRun { kind: LineKind, index: usize },

    #[error("{kind}s are {len} cells long, but candidate enumeration is limited to {MAX_LINE_LEN}")]
    LineTooLong { kind: LineKind, len: usize },

    #[error("cell density {density} must lie within [0, 1]")]
    InvalidDensity { density: f64 },
}
