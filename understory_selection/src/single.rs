// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-select store.

use core::hash::Hash;

use understory_collection::AvailableSequence;

/// At most one selected id.
///
/// In single-select widgets the controller calls [`SingleSelection::replace`]
/// on every focus move so the selection always equals the active item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleSelection<K> {
    selected: Option<K>,
}

impl<K> SingleSelection<K> {
    /// An empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// The selected id, if any.
    #[must_use]
    pub const fn get(&self) -> Option<&K> {
        self.selected.as_ref()
    }
}

impl<K: Clone + Eq + Hash> SingleSelection<K> {
    /// Select exactly `id`. Returns `true` if the selection changed.
    pub fn replace(&mut self, id: K) -> bool {
        if self.selected.as_ref() == Some(&id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Returns `true` if `id` is the selected id.
    pub fn contains(&self, id: &K) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Deselect. Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Deselect if the selected id is no longer navigable.
    pub fn retain_available(&mut self, seq: &AvailableSequence<K>) -> bool {
        let stale = self.selected.as_ref().is_some_and(|id| !seq.contains(id));
        stale && self.clear()
    }
}

impl<K> Default for SingleSelection<K> {
    fn default() -> Self {
        Self::new()
    }
}
