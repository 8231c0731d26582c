use prettytable::{Cell, Row, Table};

/// Counters accumulated over one `solve` call, covering both the propagation
/// phase and the search phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Consistent row assignments committed during search (the state
    /// expansions of the search tree).
    pub nodes_visited: u64,
    /// Assignments retracted after their subtree failed.
    pub backtracks: u64,
    /// Ancestor rows skipped outright because they were absent from a
    /// conflict set (backjumping only).
    pub backjumps: u64,
    /// Arcs popped and revised by AC-3.
    pub revisions: u64,
    /// Candidates removed from row domains by AC-3.
    pub prunings: u64,
    /// Depth-limited passes run by the iterative-deepening driver.
    pub deepening_passes: u64,
}

/// Renders the counters as a two-column table for CLI output.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));

    let rows: [(&str, u64); 6] = [
        ("Nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
        ("Backjumps", stats.backjumps),
        ("AC-3 revisions", stats.revisions),
        ("AC-3 prunings", stats.prunings),
        ("Deepening passes", stats.deepening_passes),
    ];
    for (name, count) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}
