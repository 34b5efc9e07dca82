// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of controller state onto ARIA attributes.

use smallvec::SmallVec;

use crate::config::{Orientation, SelectionAttribute};

/// Roving `tabindex` value for an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabIndex {
    /// The active item: `tabindex="0"`.
    Active,
    /// Every other item: `tabindex="-1"`.
    Inactive,
}

impl TabIndex {
    /// Numeric attribute value.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Active => 0,
            Self::Inactive => -1,
        }
    }

    /// Attribute value as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "0",
            Self::Inactive => "-1",
        }
    }
}

/// Render state for one host item (disabled items included).
#[derive(Debug)]
pub struct ItemState<'a, K> {
    /// The item's id.
    pub id: &'a K,
    /// Index in the host's source list.
    pub source_index: usize,
    /// Roving tabindex.
    pub tab_index: TabIndex,
    /// Whether the item is selected.
    pub selected: bool,
    /// Whether the item is disabled.
    pub disabled: bool,
}

impl<K> Clone for ItemState<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for ItemState<'_, K> {}

impl<K> ItemState<'_, K> {
    /// Attribute name/value pairs for this item.
    ///
    /// `tabindex` is always present. The selection attribute is emitted when
    /// the pattern has one (disabled items report `"false"`), and
    /// `aria-disabled="true"` marks disabled items.
    pub fn attributes(
        &self,
        selection: Option<SelectionAttribute>,
    ) -> SmallVec<[(&'static str, &'static str); 3]> {
        let mut attrs = SmallVec::new();
        attrs.push(("tabindex", self.tab_index.as_str()));
        if let Some(attribute) = selection {
            attrs.push((attribute.name(), bool_str(self.selected)));
        }
        if self.disabled {
            attrs.push(("aria-disabled", "true"));
        }
        attrs
    }
}

/// Render state for the composite container.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContainerState {
    /// Navigation orientation.
    pub orientation: Orientation,
    /// Whether multiple items can be selected.
    pub multiselectable: bool,
}

impl ContainerState {
    /// Attribute name/value pairs for the container.
    pub fn attributes(&self) -> [(&'static str, &'static str); 2] {
        [
            ("aria-orientation", self.orientation.aria_value()),
            ("aria-multiselectable", bool_str(self.multiselectable)),
        ]
    }
}

const fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
