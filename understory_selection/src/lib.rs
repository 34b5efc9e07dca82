// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Selection: selection stores for composite widgets.
//!
//! A widget is either single-select (a listbox whose selection follows focus,
//! a tab list) or multi-select (`aria-multiselectable="true"`). The two modes
//! support different operations, so they are modelled as two types joined by
//! the [`Selection`] tagged union:
//!
//! - [`SingleSelection`]: at most one id, updated with [`SingleSelection::replace`].
//! - [`MultiSelection`]: any number of ids, updated with
//!   [`MultiSelection::toggle`], [`MultiSelection::extend_range`], and
//!   [`MultiSelection::select_all`].
//!
//! Because the multi-select operations only exist on [`MultiSelection`],
//! calling `toggle` on a single-select widget is a compile error rather than a
//! runtime condition. Callers match on [`Selection`] exhaustively:
//!
//! ```rust
//! use understory_collection::{AvailableSequence, NavigableItem};
//! use understory_selection::{Selection, SelectionMode};
//!
//! let seq = AvailableSequence::new(vec![
//!     NavigableItem::new("a", "Alpha"),
//!     NavigableItem::new("b", "Beta"),
//!     NavigableItem::new("c", "Gamma"),
//!     NavigableItem::new("d", "Delta"),
//! ]);
//!
//! let mut selection = Selection::new(SelectionMode::Multi);
//! match &mut selection {
//!     Selection::Single(single) => {
//!         single.replace("a");
//!     }
//!     Selection::Multi(multi) => {
//!         // Shift+Down twice from the anchor at 1.
//!         multi.extend_range(1, 3, &seq);
//!     }
//! }
//! let ids: Vec<_> = selection.ids_in_order(&seq).copied().collect();
//! assert_eq!(ids, ["b", "c", "d"]);
//! ```
//!
//! Every mutating operation reports whether the stored set actually changed,
//! so hosts only fire `onSelectionChange` when something happened.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod multi;
mod single;

use core::hash::Hash;

use understory_collection::AvailableSequence;

pub use multi::MultiSelection;
pub use single::SingleSelection;

/// Selection mode chosen when a widget is configured.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one item is selected, and selection follows focus.
    #[default]
    Single,
    /// Any number of items may be selected independently of focus.
    Multi,
}

/// A selection store in one of the two modes.
#[derive(Clone, Debug)]
pub enum Selection<K> {
    /// Single-select store.
    Single(SingleSelection<K>),
    /// Multi-select store.
    Multi(MultiSelection<K>),
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty store for `mode`.
    pub fn new(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(SingleSelection::new()),
            SelectionMode::Multi => Self::Multi(MultiSelection::new()),
        }
    }

    /// The mode of this store.
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multi(_) => SelectionMode::Multi,
        }
    }

    /// Returns `true` if `id` is selected.
    pub fn contains(&self, id: &K) -> bool {
        match self {
            Self::Single(s) => s.contains(id),
            Self::Multi(m) => m.contains(id),
        }
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(s) => usize::from(s.get().is_some()),
            Self::Multi(m) => m.len(),
        }
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deselect everything. Returns `true` if the set changed.
    pub fn clear(&mut self) -> bool {
        match self {
            Self::Single(s) => s.clear(),
            Self::Multi(m) => m.clear(),
        }
    }

    /// Drop ids that are no longer navigable in `seq`.
    ///
    /// Called after the host's items change so disabled or removed items never
    /// stay selected. Returns `true` if the set changed.
    pub fn retain_available(&mut self, seq: &AvailableSequence<K>) -> bool {
        match self {
            Self::Single(s) => s.retain_available(seq),
            Self::Multi(m) => m.retain_available(seq),
        }
    }

    /// Selected ids in sequence order.
    pub fn ids_in_order<'a>(
        &'a self,
        seq: &'a AvailableSequence<K>,
    ) -> impl Iterator<Item = &'a K> + 'a {
        seq.ids().filter(move |id| self.contains(id))
    }
}
