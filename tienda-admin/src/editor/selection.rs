//! Category selection set
//!
//! The single source of truth for which master categories are linked to the
//! store being edited. One instance lives per edit session.

use std::collections::HashSet;

/// Selected master-category ids, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    order: Vec<i64>,
    members: HashSet<i64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `ids`. Duplicates keep their first position.
    pub fn initialize<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = i64>,
    {
        self.order.clear();
        self.members.clear();
        for id in ids {
            self.add(id);
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.members.contains(&id)
    }

    /// Returns `true` if the id was not already selected
    pub fn add(&mut self, id: i64) -> bool {
        if self.members.insert(id) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    /// Returns `true` if the id was selected
    pub fn remove(&mut self, id: i64) -> bool {
        if self.members.remove(&id) {
            self.order.retain(|&existing| existing != id);
            true
        } else {
            false
        }
    }

    /// Flip membership of `id` and return the new membership value
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id);
            true
        }
    }

    /// Selected ids in insertion order
    pub fn snapshot(&self) -> Vec<i64> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<i64> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        set.initialize(iter);
        set
    }
}
