// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item registry: host items and the enabled sub-sequence navigation runs over.

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

/// A single item as supplied by the host view.
///
/// Identity is the `id`. The `label` is what type-ahead matches against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigableItem<K> {
    /// Identifier for this item; must be unique within a collection.
    pub id: K,
    /// Accessible label used for type-ahead prefix matching.
    pub label: String,
    /// Disabled items are rendered but never focused or selected.
    pub disabled: bool,
}

impl<K> NavigableItem<K> {
    /// Create an enabled item.
    pub fn new(id: K, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            disabled: false,
        }
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// The ordered sub-sequence of enabled items.
///
/// Positions in this type always refer to the *available* sequence, never to
/// the host's source list. Use [`AvailableSequence::source_index_of`] to map
/// back when rendering.
///
/// Rebuild it whenever the host's items change; it is an immutable snapshot
/// otherwise.
#[derive(Clone, Debug)]
pub struct AvailableSequence<K> {
    items: Vec<NavigableItem<K>>,
    /// Source index of each available position.
    available: Vec<usize>,
    positions: HashMap<K, usize>,
}

impl<K: Clone + Eq + Hash> AvailableSequence<K> {
    /// Build a sequence from host items, filtering out disabled entries.
    ///
    /// Relative order is preserved. If an id occurs more than once, only its
    /// first enabled occurrence is navigable.
    pub fn new(items: Vec<NavigableItem<K>>) -> Self {
        let mut available = Vec::with_capacity(items.len());
        let mut positions = HashMap::with_capacity(items.len());
        for (source, item) in items.iter().enumerate() {
            if item.disabled {
                continue;
            }
            if positions.contains_key(&item.id) {
                tracing::warn!(source, "duplicate item id; later occurrence is not navigable");
                continue;
            }
            positions.insert(item.id.clone(), available.len());
            available.push(source);
        }
        Self {
            items,
            available,
            positions,
        }
    }

    /// An empty sequence.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of navigable items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Returns `true` if nothing is navigable (no items, or all disabled).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Position of `id` within the available sequence.
    ///
    /// Disabled and unknown ids have no position.
    pub fn position_of(&self, id: &K) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Returns `true` if `id` is navigable.
    pub fn contains(&self, id: &K) -> bool {
        self.positions.contains_key(id)
    }

    /// The item at an available position.
    pub fn get(&self, pos: usize) -> Option<&NavigableItem<K>> {
        self.available.get(pos).map(|&source| &self.items[source])
    }

    /// The id at an available position.
    pub fn id_at(&self, pos: usize) -> Option<&K> {
        self.get(pos).map(|item| &item.id)
    }

    /// The label at an available position.
    pub fn label_at(&self, pos: usize) -> Option<&str> {
        self.get(pos).map(|item| item.label.as_str())
    }

    /// Index into the host's source list for an available position.
    pub fn source_index_of(&self, pos: usize) -> Option<usize> {
        self.available.get(pos).copied()
    }

    /// Available position of the item at a source index, if it is navigable.
    pub fn position_of_source(&self, source: usize) -> Option<usize> {
        let item = self.items.get(source)?;
        let pos = self.position_of(&item.id)?;
        (self.available[pos] == source).then_some(pos)
    }

    /// Navigable ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.available.iter().map(|&source| &self.items[source].id)
    }

    /// Every item the host supplied, disabled ones included, in source order.
    pub fn items(&self) -> &[NavigableItem<K>] {
        &self.items
    }

    /// Resolve a position in a previous snapshot to the same item here.
    ///
    /// Used to keep focus and the selection anchor on the same item across
    /// updates. Returns `None` if the item is gone or now disabled.
    pub fn remap_from(&self, old: &Self, old_pos: usize) -> Option<usize> {
        old.id_at(old_pos).and_then(|id| self.position_of(id))
    }
}

impl<K: Clone + Eq + Hash> Default for AvailableSequence<K> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn items(entries: &[(&'static str, bool)]) -> Vec<NavigableItem<&'static str>> {
        entries
            .iter()
            .map(|&(id, disabled)| NavigableItem::new(id, id).disabled(disabled))
            .collect()
    }

    #[test]
    fn filters_disabled_and_preserves_order() {
        let seq = AvailableSequence::new(items(&[
            ("a", true),
            ("b", false),
            ("c", true),
            ("d", false),
            ("e", true),
        ]));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.ids().copied().collect::<Vec<_>>(), vec!["b", "d"]);
        assert_eq!(seq.position_of(&"d"), Some(1));
        assert_eq!(seq.position_of(&"a"), None);
        assert_eq!(seq.source_index_of(1), Some(3));
        assert_eq!(seq.items().len(), 5);
    }

    #[test]
    fn empty_and_all_disabled_are_empty() {
        let seq: AvailableSequence<&str> = AvailableSequence::empty();
        assert!(seq.is_empty());
        assert_eq!(seq.id_at(0), None);

        let seq = AvailableSequence::new(items(&[("a", true), ("b", true)]));
        assert!(seq.is_empty());
        assert_eq!(seq.items().len(), 2);
        assert_eq!(seq.position_of_source(0), None);
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let seq = AvailableSequence::new(items(&[("a", false), ("b", false), ("a", false)]));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.position_of_source(0), Some(0));
        assert_eq!(seq.position_of_source(2), None);
    }

    #[test]
    fn remap_follows_ids_across_updates() {
        let old = AvailableSequence::new(items(&[("a", false), ("b", false), ("c", false)]));
        let new = AvailableSequence::new(items(&[("c", false), ("a", true), ("b", false)]));

        // "b" moved from 1 to 1 (since "a" is disabled now), "c" moved to 0.
        assert_eq!(new.remap_from(&old, 1), Some(1));
        assert_eq!(new.remap_from(&old, 2), Some(0));
        // "a" is disabled in the new snapshot.
        assert_eq!(new.remap_from(&old, 0), None);
        // Out of range in the old snapshot.
        assert_eq!(new.remap_from(&old, 9), None);
    }

    #[test]
    fn labels_resolve_by_position() {
        let seq = AvailableSequence::new(vec![
            NavigableItem::new(1_u32, "Apple"),
            NavigableItem::new(2_u32, "Banana").disabled(true),
            NavigableItem::new(3_u32, "Cherry"),
        ]);
        assert_eq!(seq.label_at(0), Some("Apple"));
        assert_eq!(seq.label_at(1), Some("Cherry"));
        assert_eq!(seq.label_at(2), None);
    }
}
