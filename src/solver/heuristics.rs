//! Row-selection heuristics: strategies for choosing which unassigned row
//! the search should branch on next.

use crate::solver::{assignment::Assignment, domains::DomainSet};

/// A strategy for picking the next row to assign.
pub trait RowSelection: std::fmt::Debug {
    /// Returns the next unassigned row to branch on, or `None` when every
    /// row is assigned.
    fn select(&self, assignment: &Assignment, domains: &DomainSet) -> Option<usize>;
}

/// Picks the lowest-indexed unassigned row. Deterministic and the closest
/// match to textbook backtracking.
#[derive(Debug)]
pub struct SelectFirst;

impl RowSelection for SelectFirst {
    fn select(&self, assignment: &Assignment, _domains: &DomainSet) -> Option<usize> {
        (0..assignment.height()).find(|&r| !assignment.is_assigned(r))
    }
}

/// Minimum remaining values: picks the unassigned row with the smallest
/// domain, biasing the search toward the most constrained row first. Ties
/// break toward the lower index so selection stays deterministic.
#[derive(Debug)]
pub struct MinimumRemainingValues;

impl RowSelection for MinimumRemainingValues {
    fn select(&self, assignment: &Assignment, domains: &DomainSet) -> Option<usize> {
        (0..assignment.height())
            .filter(|&r| !assignment.is_assigned(r))
            .min_by_key(|&r| (domains.rows[r].len(), r))
    }
}
