//! Which incident cards currently show their description.
//!
//! Pure view state keyed by incident id. It never touches the store, so ids
//! of incidents hidden by the current filter simply stay in the set.

use std::collections::BTreeSet;

use crate::types::IncidentId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    expanded: BTreeSet<IncidentId>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`, returning whether it is now expanded
    pub fn toggle(&mut self, id: IncidentId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: IncidentId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
