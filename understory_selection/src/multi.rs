// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-select store.

use core::hash::Hash;

use hashbrown::HashSet;
use understory_collection::AvailableSequence;

/// Any number of selected ids, independent of focus.
///
/// Storage is unordered; use [`crate::Selection::ids_in_order`] when the host
/// needs the ids in collection order.
#[derive(Clone, Debug)]
pub struct MultiSelection<K> {
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> MultiSelection<K> {
    /// An empty selection.
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    /// Returns `true` if `id` is selected.
    pub fn contains(&self, id: &K) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.selected.iter()
    }

    /// Flip the membership of `id`. Returns whether `id` is now selected.
    ///
    /// Focus is not affected; this is the Space / Ctrl+click operation.
    pub fn toggle(&mut self, id: K) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Add every id in the inclusive position range between `anchor` and
    /// `target` to the selection.
    ///
    /// The range is always recomputed from the anchor; ids selected by
    /// earlier extensions stay selected. Positions past the end of `seq` are
    /// clamped. Returns `true` if any id was newly selected.
    pub fn extend_range(
        &mut self,
        anchor: usize,
        target: usize,
        seq: &AvailableSequence<K>,
    ) -> bool {
        if seq.is_empty() {
            return false;
        }
        let last = seq.len() - 1;
        let (lo, hi) = if anchor <= target {
            (anchor, target)
        } else {
            (target, anchor)
        };
        let (lo, hi) = (lo.min(last), hi.min(last));
        let mut changed = false;
        for pos in lo..=hi {
            if let Some(id) = seq.id_at(pos) {
                changed |= self.selected.insert(id.clone());
            }
        }
        changed
    }

    /// Select every navigable id. Returns `true` if the set changed.
    pub fn select_all(&mut self, seq: &AvailableSequence<K>) -> bool {
        let before = self.selected.len();
        self.selected.extend(seq.ids().cloned());
        self.selected.len() != before
    }

    /// Replace the selection with `ids`. Returns `true` if the set changed.
    ///
    /// Used when the host owns selection state and pushes it down.
    pub fn set(&mut self, ids: impl IntoIterator<Item = K>) -> bool {
        let next: HashSet<K> = ids.into_iter().collect();
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Deselect everything. Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    /// Drop ids that are no longer navigable in `seq`.
    pub fn retain_available(&mut self, seq: &AvailableSequence<K>) -> bool {
        let before = self.selected.len();
        self.selected.retain(|id| seq.contains(id));
        self.selected.len() != before
    }
}

impl<K: Clone + Eq + Hash> Default for MultiSelection<K> {
    fn default() -> Self {
        Self::new()
    }
}
