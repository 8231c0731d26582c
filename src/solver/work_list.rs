use std::collections::{HashSet, VecDeque};

/// An arc in the constraint graph: row index crossed with column index.
pub type Arc = (usize, usize);

/// FIFO worklist of arcs awaiting revision, with membership dedup so an arc
/// already queued is not queued twice.
#[derive(Debug)]
pub struct WorkList {
    queue: VecDeque<Arc>,
    queued: HashSet<Arc>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
        }
    }

    /// Seeds the list with every row-column arc, row-major.
    pub fn all_arcs(height: usize, width: usize) -> Self {
        let mut list = Self::new();
        for row in 0..height {
            for col in 0..width {
                list.push_back((row, col));
            }
        }
        list
    }

    pub fn push_back(&mut self, arc: Arc) {
        if self.queued.insert(arc) {
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.queued.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}
