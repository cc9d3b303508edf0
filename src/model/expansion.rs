//! Expansion tracker - which rows have their detail panel open

use super::record::RecordId;
use std::collections::HashSet;

/// Set of expanded record ids
#[derive(Debug, Clone, Default)]
pub struct ExpansionTracker {
    expanded: HashSet<RecordId>,
    /// Opening a row collapses every other row
    exclusive: bool,
}

impl ExpansionTracker {
    pub fn new(exclusive: bool) -> Self {
        Self {
            expanded: HashSet::new(),
            exclusive,
        }
    }

    /// Flip membership of `id`
    pub fn toggle(&mut self, id: &RecordId) {
        if !self.expanded.remove(id) {
            if self.exclusive {
                self.expanded.clear();
            }
            self.expanded.insert(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.expanded.contains(id)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
